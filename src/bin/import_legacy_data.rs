// Reconcile the legacy Teamwear exports into a JSON seed for the dashboard.
//
// Usage:
//   cargo run --bin import_legacy_data -- [source_dir] [output_file]
//
// source_dir defaults to the current directory and must contain
// "TW QTY LIST.csv"; the item list and the two barcode files are optional
// (missing names fall back to defaults, barcodes merge first-writer-wins
// in priority order).

use std::error::Error;
use std::path::PathBuf;

use warehouse_inventory::config::LegacySourceLayout;
use warehouse_inventory::domain::Warehouse;
use warehouse_inventory::importer::reconciler::{
    BarcodeSource, ImagePolicy, ProductReconciler, ReconcileSources,
};
use warehouse_inventory::importer::source_reader::UniversalSourceReader;
use warehouse_inventory::writer::seed_writer::{write_seed_file, SeedDocument};

fn main() -> Result<(), Box<dyn Error>> {
    warehouse_inventory::logging::init();

    let mut args = std::env::args().skip(1);
    let source_dir = args.next().unwrap_or_else(|| ".".to_string());
    let layout = LegacySourceLayout::new(&source_dir);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| layout.seed_output());

    tracing::info!("==================================================");
    tracing::info!("仓库库存看板系统 - 历史数据对账");
    tracing::info!("系统版本: {}", warehouse_inventory::VERSION);
    tracing::info!("数据源目录: {}", source_dir);
    tracing::info!("==================================================");

    let reader = UniversalSourceReader;
    // 数量清单是本流程的主源, 缺失视为配置错误; 其余源缺失降级继续
    let quantities = reader.read_required(layout.quantity_file())?;
    let items = reader.read_optional(layout.item_file())?;

    let mut barcode_sources = Vec::new();
    for (label, path) in layout.barcode_files() {
        let table = reader.read_optional(&path)?;
        barcode_sources.push(BarcodeSource::new(label, table.rows));
    }

    if quantities.skipped_short_rows > 0 || items.skipped_short_rows > 0 {
        tracing::warn!(
            quantity_rows = quantities.skipped_short_rows,
            item_rows = items.skipped_short_rows,
            "畸形行已跳过"
        );
    }

    let sources = ReconcileSources {
        names: items.rows,
        barcode_sources,
        quantities: quantities.rows,
    };

    let outcome =
        ProductReconciler::new(Warehouse::Teamwear).reconcile(&sources, ImagePolicy::None);
    let doc = SeedDocument::from_outcome(&outcome);
    write_seed_file(&output, &doc)?;

    println!("run_id={}", outcome.run_id);
    println!(
        "products={} inventory={} defaulted_names={} barcode_conflicts={}",
        outcome.stats.products,
        outcome.stats.quantity_rows,
        outcome.stats.defaulted_names,
        outcome.stats.barcode_conflicts
    );
    println!("seed={}", output.display());
    Ok(())
}
