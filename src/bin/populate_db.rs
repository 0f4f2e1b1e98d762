// Load a reconciled JSON seed into the SQLite database.
//
// Usage:
//   cargo run --bin populate_db -- [seed_file] [db_path]
//
// seed_file defaults to "products.json"; db_path defaults to the
// per-user data directory (override with WAREHOUSE_INVENTORY_DB_PATH).
// Products are upserted in batches; inventory is replaced per division
// so re-running the same seed is idempotent.

use std::error::Error;
use std::path::Path;

use warehouse_inventory::config::get_default_db_path;
use warehouse_inventory::domain::Warehouse;
use warehouse_inventory::store::item_store::ItemStore;
use warehouse_inventory::store::sqlite_store::SqliteItemStore;
use warehouse_inventory::writer::seed_writer::read_seed_file;
use warehouse_inventory::writer::upsert_writer::UpsertWriter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    warehouse_inventory::logging::init();

    let mut args = std::env::args().skip(1);
    let seed_path = args.next().unwrap_or_else(|| "products.json".to_string());
    let db_path = args.next().unwrap_or_else(get_default_db_path);

    tracing::info!("==================================================");
    tracing::info!("仓库库存看板系统 - 数据库填充");
    tracing::info!("系统版本: {}", warehouse_inventory::VERSION);
    tracing::info!("种子文件: {}", seed_path);
    tracing::info!("使用数据库: {}", db_path);
    tracing::info!("==================================================");

    let doc = read_seed_file(Path::new(&seed_path))?;
    let store = SqliteItemStore::new(&db_path)?;

    let report = UpsertWriter::upsert_in_batches(&store, &doc.item_master).await;
    if !report.is_complete() {
        return Err(format!(
            "upsert accounting mismatch: {} + {} != {}",
            report.processed, report.errored, report.total
        )
        .into());
    }

    // 库存按分部整体替换, 同一种子重复执行结果一致
    let mut inventory_written = 0usize;
    for warehouse in [Warehouse::Teamwear, Warehouse::Retail] {
        let records: Vec<_> = doc
            .inventory
            .iter()
            .filter(|r| r.warehouse == warehouse)
            .cloned()
            .collect();
        if records.is_empty() {
            continue;
        }
        inventory_written += store.replace_inventory(warehouse, &records).await?;
    }

    println!(
        "products={} processed={} errored={} batches={}",
        report.total, report.processed, report.errored, report.batches
    );
    for batch_error in &report.batch_errors {
        eprintln!(
            "batch {} failed ({} items): {}",
            batch_error.batch_index, batch_error.size, batch_error.message
        );
    }
    println!("inventory={}", inventory_written);
    println!("db={}", db_path);
    Ok(())
}
