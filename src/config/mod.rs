// ==========================================
// 仓库库存看板系统 - 配置模块
// ==========================================
// 职责: 数据目录 / 数据库路径 / 数据源文件布局
// ==========================================

pub mod paths;
pub mod sources;

pub use paths::{get_default_data_dir, get_default_db_path, DB_PATH_ENV};
pub use sources::{DivisionSourceLayout, LegacySourceLayout, UserSourceLayout};
