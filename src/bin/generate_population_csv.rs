// Build the three-column population CSV (Item Number, Name, Barcode) the
// back office bulk-importer accepts, by joining the legacy item list with
// the barcode exports.
//
// Usage:
//   cargo run --bin generate_population_csv -- [source_dir] [output_file]

use std::error::Error;
use std::path::PathBuf;

use warehouse_inventory::config::sources::POPULATION_CSV_FILE;
use warehouse_inventory::config::LegacySourceLayout;
use warehouse_inventory::importer::source_reader::UniversalSourceReader;
use warehouse_inventory::writer::population_csv::{build_population_rows, write_population_csv};

fn main() -> Result<(), Box<dyn Error>> {
    warehouse_inventory::logging::init();

    let mut args = std::env::args().skip(1);
    let source_dir = args.next().unwrap_or_else(|| ".".to_string());
    let layout = LegacySourceLayout::new(&source_dir);
    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| layout.root.join(POPULATION_CSV_FILE));

    let reader = UniversalSourceReader;
    let items = reader.read_required(layout.item_file())?;

    // 条码表按优先级拼接, 重复 SKU 先到先得
    let mut barcode_rows = Vec::new();
    for (_, path) in layout.barcode_files() {
        barcode_rows.extend(reader.read_optional(&path)?.rows);
    }

    let rows = build_population_rows(&items.rows, &barcode_rows);
    let written = write_population_csv(&output, &rows)?;

    println!("rows={} output={}", written, output.display());
    Ok(())
}
