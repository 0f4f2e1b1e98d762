// ==========================================
// 仓库库存看板系统 - 存储层
// ==========================================
// 职责: 商品主数据/库存明细/任务的持久化
// 红线: 不含对账与分组规则
// ==========================================

pub mod error;
pub mod item_store;
pub mod sqlite_store;

// 重导出核心类型
pub use error::{StoreError, StoreResult};
pub use item_store::ItemStore;
pub use sqlite_store::SqliteItemStore;
