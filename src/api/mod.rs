// ==========================================
// 仓库库存看板系统 - API 层
// ==========================================
// 职责: 面向看板前端的导入与查询入口
// 红线: API 层只做校验与编排, 规则在 engine/importer, 持久化在 store
// ==========================================

pub mod dashboard_api;
pub mod error;
pub mod import_api;

// 重导出核心类型
pub use dashboard_api::{DashboardApi, DashboardSummary};
pub use error::{ApiError, ApiResult};
pub use import_api::{ImportApi, SetupImportRequest, SetupImportResponse, REQUIRED_SETUP_HEADERS};
