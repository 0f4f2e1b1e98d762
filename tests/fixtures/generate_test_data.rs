// ==========================================
// 测试数据生成器
// ==========================================
// 用途: 重新生成 tests/fixtures 下的 CSV 测试文件
// 输出: tests/fixtures/legacy/*.csv + tests/fixtures/retail_items.csv
// 说明: 故意混入表头残留行、短行、空行、负数与小数数量,
//       覆盖对账引擎的各条宽容规则
// ==========================================

use csv::WriterBuilder;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("开始生成测试数据集...");

    std::fs::create_dir_all("tests/fixtures/legacy")?;

    generate_legacy_quantity_list()?;
    generate_legacy_item_list()?;
    generate_legacy_barcode_files()?;
    generate_retail_items()?;

    println!("✓ 所有测试数据集生成完成！");
    Ok(())
}

// 数量清单: 含 "*" 库位、小数数量、负数数量、短行与空行
fn generate_legacy_quantity_list() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/legacy/TW QTY LIST.csv";
    let mut wtr = WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(["SKU", "Bin", "Quantity"])?;
    wtr.write_record(["CTS-JRS-S", "A-01", "4"])?;
    wtr.write_record(["CTS-JRS-M", "A-01", "10.0"])?;
    wtr.write_record(["CTS-JRS-L", "*", "2"])?;
    wtr.write_record(["CTS-HDY-XL", "B-07", "-3"])?;
    // 短行（导出工具截断的残行）
    wtr.write_record(["SHORTROW"])?;
    // 空行
    wtr.write_record(["", "", ""])?;
    wtr.write_record(["CTS-SHT-M", "B-02", ""])?;

    wtr.flush()?;
    println!("✓ 生成 TW QTY LIST.csv (5条有效, 1短行, 1空行)");
    Ok(())
}

// 条目清单: 含表头残留行与同 SKU 重复行（后行名称生效）
fn generate_legacy_item_list() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/legacy/TW Item List.csv";
    let mut wtr = WriterBuilder::new().from_path(path)?;

    wtr.write_record(["Item Number", "Description"])?;
    wtr.write_record(["CTS-JRS-S", "Courtside Jersey S"])?;
    wtr.write_record(["CTS-JRS-M", "Courtside Jersey M"])?;
    wtr.write_record(["CTS-JRS-L", "Courtside Jersey L"])?;
    wtr.write_record(["CTS-SHT-M", "Training Shorts, Mesh M"])?;
    // 串联导出残留的表头行, 对账时按无效 SKU 跳过
    wtr.write_record(["Item Number", "Description"])?;
    wtr.write_record(["CTS-JRS-M", "Courtside Home Jersey M"])?;

    wtr.flush()?;
    println!("✓ 生成 TW Item List.csv (5条有效, 1表头残留)");
    Ok(())
}

// 条码文件: barcode2 优先, barcodes tw 中与其冲突的行不生效
fn generate_legacy_barcode_files() -> Result<(), Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_path("tests/fixtures/legacy/barcode2.csv")?;
    wtr.write_record(["Item Number", "Barcode"])?;
    wtr.write_record(["CTS-JRS-S", "5060101300011"])?;
    wtr.write_record(["CTS-JRS-M", "5060101300028"])?;
    wtr.flush()?;
    println!("✓ 生成 barcode2.csv (2条)");

    let mut wtr = WriterBuilder::new().from_path("tests/fixtures/legacy/barcodes tw.csv")?;
    wtr.write_record(["SKU", "Barcode"])?;
    wtr.write_record(["CTS-JRS-M", "9990000000000"])?;
    wtr.write_record(["CTS-JRS-L", "5060101300035"])?;
    wtr.write_record(["CTS-HDY-XL", "5060101300042"])?;
    wtr.flush()?;
    println!("✓ 生成 barcodes tw.csv (3条, 1冲突)");
    Ok(())
}

// 零售导出: 单表同时携带名称/条码/库存, 末行无库存信息
fn generate_retail_items() -> Result<(), Box<dyn Error>> {
    let path = "tests/fixtures/retail_items.csv";
    let mut wtr = WriterBuilder::new().from_path(path)?;

    wtr.write_record(["Item Number", "Description", "Barcode", "Bin", "Quantity"])?;
    wtr.write_record(["CRS-TEE-S", "Retail Tee S", "5060200100013", "R-01", "6"])?;
    wtr.write_record(["CRS-TEE-M", "Retail Tee M", "5060200100020", "R-01", "9"])?;
    wtr.write_record(["CRS-TEE-L", "Retail Tee L", "", "R-02", "3"])?;
    wtr.write_record(["CRS-CAP-OS", "Retail Cap", "5060200100037", "", ""])?;

    wtr.flush()?;
    println!("✓ 生成 retail_items.csv (4条, 1条无库存)");
    Ok(())
}
