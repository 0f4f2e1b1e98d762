// ==========================================
// 仓库库存看板系统 - 数据库填充 CSV 导出
// ==========================================
// 产物: population_import.csv（Item Number, Name, Barcode 三列）
// 用途: 交运营在后台批量导入时使用
// 规则: 逐行对应名称表, 条码按 SKU 先到先得补齐;
//       含逗号/引号的值由 csv 库负责转义
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::source_reader::RawRow;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// 导出 CSV 的表头
pub const POPULATION_HEADERS: [&str; 3] = ["Item Number", "Name", "Barcode"];

/// 导出行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopulationRow {
    pub item_number: String,
    pub name: String,
    pub barcode: String,
}

/// 名称表 + 条码表 → 导出行
///
/// - 名称表逐行产出（SKU 无效的行剔除, 不去重）
/// - 条码映射先到先得, 无条码的行留空串
pub fn build_population_rows(names: &[RawRow], barcodes: &[RawRow]) -> Vec<PopulationRow> {
    let mapper = FieldMapper;

    let mut barcode_map: HashMap<String, String> = HashMap::new();
    for row in barcodes {
        let sku = match mapper.get_sku(row) {
            Some(sku) => sku,
            None => continue,
        };
        let barcode = match mapper.get_string(row, "Barcode") {
            Some(b) => b,
            None => continue,
        };
        barcode_map.entry(sku).or_insert(barcode);
    }

    names
        .iter()
        .filter_map(|row| {
            let sku = mapper.get_sku(row)?;
            let name = mapper.get_string(row, "Description").unwrap_or_default();
            let barcode = barcode_map.get(&sku).cloned().unwrap_or_default();
            Some(PopulationRow {
                item_number: sku,
                name,
                barcode,
            })
        })
        .collect()
}

/// 写出填充 CSV（整文件覆盖）
pub fn write_population_csv(path: &Path, rows: &[PopulationRow]) -> ImportResult<usize> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ImportError::OutputDirError {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(POPULATION_HEADERS)?;
    for row in rows {
        writer.write_record([&row.item_number, &row.name, &row.barcode])?;
    }
    writer.flush().map_err(|e| ImportError::FileReadError(e.to_string()))?;

    info!(path = %path.display(), rows = rows.len(), "填充 CSV 写出完成");
    Ok(rows.len())
}
