// Reconcile the per-division user exports (retail + teamwear) into the
// products.json seed, resolving and copying product images on the way.
//
// Usage:
//   cargo run --bin import_user_data -- [source_dir] [public_dir]
//
// source_dir defaults to the current directory; public_dir (default
// "public") receives matched images under public_dir/product-images.

use std::error::Error;

use warehouse_inventory::config::UserSourceLayout;
use warehouse_inventory::engine::image_resolver::ImageIndex;
use warehouse_inventory::importer::field_mapper::FieldMapper;
use warehouse_inventory::importer::reconciler::{
    BarcodeSource, ImagePolicy, ProductReconciler, ReconcileSources,
};
use warehouse_inventory::importer::source_reader::UniversalSourceReader;
use warehouse_inventory::writer::seed_writer::{write_seed_file, SeedDocument};

fn main() -> Result<(), Box<dyn Error>> {
    warehouse_inventory::logging::init();

    let mut args = std::env::args().skip(1);
    let source_dir = args.next().unwrap_or_else(|| ".".to_string());
    let public_dir = args.next().unwrap_or_else(|| "public".to_string());
    let layout = UserSourceLayout::new(&source_dir, &public_dir);

    tracing::info!("==================================================");
    tracing::info!("仓库库存看板系统 - 用户数据对账");
    tracing::info!("系统版本: {}", warehouse_inventory::VERSION);
    tracing::info!("数据源目录: {}", source_dir);
    tracing::info!("==================================================");

    let reader = UniversalSourceReader;
    let mapper = FieldMapper;
    let image_output = layout.image_output_dir();
    let mut combined = SeedDocument::default();

    for division in layout.divisions() {
        // 事业部导出属于可选数据源, 缺一个不影响另一个
        let items = reader.read_optional(&division.items_file)?;
        let index = ImageIndex::scan(&division.image_dir);
        tracing::info!(
            division = division.label,
            rows = items.rows.len(),
            images = index.len(),
            "事业部数据源读取完成"
        );

        // 用户表单表三用: 名称 + 条码逐行取, 库存只取带库位或数量的行
        let quantities: Vec<_> = items
            .rows
            .iter()
            .filter(|row| mapper.has_inventory_fields(row))
            .cloned()
            .collect();

        let sources = ReconcileSources {
            names: items.rows.clone(),
            barcode_sources: vec![BarcodeSource::new(division.label, items.rows)],
            quantities,
        };

        let outcome = ProductReconciler::new(division.warehouse).reconcile(
            &sources,
            ImagePolicy::ResolveAndCopy(&index, &image_output),
        );
        println!(
            "division={} products={} inventory={} images={}",
            division.label,
            outcome.stats.products,
            outcome.stats.quantity_rows,
            outcome.stats.images_resolved
        );
        combined.extend(SeedDocument::from_outcome(&outcome));
    }

    let output = layout.seed_output();
    write_seed_file(&output, &combined)?;
    println!(
        "total_products={} total_inventory={} seed={}",
        combined.item_master.len(),
        combined.inventory.len(),
        output.display()
    );
    Ok(())
}
