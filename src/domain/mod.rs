// ==========================================
// 仓库库存看板系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型与宽容反序列化规则
// 红线: 不含数据访问逻辑, 不含对账/分组算法
// ==========================================

pub mod product;
pub mod style;
pub mod task;
pub mod types;

// 重导出核心类型
pub use product::{InventoryRecord, ProductRecord, RawItemRecord, UNASSIGNED_BIN};
pub use style::{SizedVariant, StyleGroup};
pub use task::WarehouseTask;
pub use types::{ProductStatus, TaskStatus, Warehouse};
