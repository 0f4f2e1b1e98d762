// ==========================================
// 仓库库存看板系统 - 核心库
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: CSV 对账与商品主数据引擎 (看板前端外部协作)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 存储层 - 数据访问
pub mod store;

// 写出层 - 种子文件 / CSV / 批量落库
pub mod writer;

// 配置层 - 路径与数据源布局
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    InventoryRecord, ProductRecord, ProductStatus, RawItemRecord, SizedVariant, StyleGroup,
    TaskStatus, Warehouse, WarehouseTask,
};

// 引擎
pub use engine::{decompose_sku, group_products, ImageIndex, SkuParts};

// 导入
pub use importer::{
    FieldMapper, ProductReconciler, ReconcileOutcome, SourceTable, UniversalSourceReader,
};

// 存储
pub use store::{ItemStore, SqliteItemStore};

// 写出
pub use writer::{SeedDocument, UpsertReport, UpsertWriter};

// API
pub use api::{DashboardApi, ImportApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "仓库库存看板系统";

// ==========================================
// 预编译检查
// ==========================================
