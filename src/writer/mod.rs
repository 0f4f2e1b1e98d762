// ==========================================
// 仓库库存看板系统 - 产物写出层
// ==========================================
// 职责: 种子 JSON、填充 CSV 的写出与批量 upsert 编排
// ==========================================

pub mod population_csv;
pub mod seed_writer;
pub mod upsert_writer;

// 重导出核心类型
pub use population_csv::{build_population_rows, write_population_csv, PopulationRow};
pub use seed_writer::{read_seed_file, write_seed_file, SeedDocument, UNKNOWN_PRODUCT_NAME};
pub use upsert_writer::{BatchError, UpsertReport, UpsertWriter, UPSERT_BATCH_SIZE};
