// ==========================================
// 仓库库存看板系统 - 导入层
// ==========================================
// 职责: 读取外部数据源文件, 完成字段映射与多源对账
// 支持: CSV, Excel
// 红线: 本层不落库, 持久化由 writer/store 负责
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod reconciler;
pub mod source_reader;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper;
pub use reconciler::{
    BarcodeSource, ImagePolicy, ProductReconciler, ReconcileOutcome, ReconcileSources,
    ReconcileStats,
};
pub use source_reader::{
    CsvSourceReader, ExcelSourceReader, RawRow, SourceReader, SourceTable, UniversalSourceReader,
};
