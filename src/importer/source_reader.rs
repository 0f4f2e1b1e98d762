// ==========================================
// 仓库库存看板系统 - 数据源文件读取
// ==========================================
// 支持: CSV (.csv) / Excel (.xlsx/.xls)
// 规则: 首行为表头, 行以"表头→值"映射返回;
//       UTF-8 BOM 剥离, 表头去空白去引号, 短行跳过并计数
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

/// 单行数据: 表头 → 单元格值（均已去首尾空白）
pub type RawRow = HashMap<String, String>;

/// 单个数据源文件的读取结果
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,    // 表头（按列序, 已归一化）
    pub rows: Vec<RawRow>,       // 数据行（全空白行已剔除）
    pub skipped_short_rows: usize, // 列数少于表头而被跳过的行数
}

impl SourceTable {
    /// 必需列中缺失的列名
    pub fn missing_headers(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.headers.iter().any(|h| h == *name))
            .map(|name| name.to_string())
            .collect()
    }
}

// 表头归一化: 去空白、去两侧引号
fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('"').trim().to_string()
}

// ==========================================
// SourceReader Trait
// ==========================================
pub trait SourceReader {
    fn read_table(&self, file_path: &Path) -> ImportResult<SourceTable>;
}

// ==========================================
// CSV 读取实现
// ==========================================
pub struct CsvSourceReader;

impl SourceReader for CsvSourceReader {
    fn read_table(&self, file_path: &Path) -> ImportResult<SourceTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // 整体读入后剥离 BOM（csv crate 不处理 BOM, 否则首列表头带 \u{feff}）
        let content = fs::read_to_string(file_path)?;
        let content = content.trim_start_matches('\u{feff}');

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(Cursor::new(content));

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_header)
            .collect();

        let mut rows = Vec::new();
        let mut skipped_short_rows = 0usize;
        for result in reader.records() {
            let record = result?;

            // 跳过完全空白的行（不计入短行）
            if record.iter().all(|v| v.trim().is_empty()) {
                continue;
            }

            // 列数不足表头的行视为畸形行, 跳过并计数
            if record.len() < headers.len() {
                skipped_short_rows += 1;
                continue;
            }

            let mut row_map = HashMap::new();
            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }
            rows.push(row_map);
        }

        Ok(SourceTable {
            headers,
            rows,
            skipped_short_rows,
        })
    }
}

// ==========================================
// Excel 读取实现
// ==========================================
// 用途: 人工从电子表格另存的库存/条码清单
pub struct ExcelSourceReader;

impl SourceReader for ExcelSourceReader {
    fn read_table(&self, file_path: &Path) -> ImportResult<SourceTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)
            .map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))?;

        let sheet_names = workbook.sheet_names();
        if sheet_names.is_empty() {
            return Err(ImportError::ExcelParseError("Excel 文件无工作表".to_string()));
        }

        let sheet_name = sheet_names[0].clone();
        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| normalize_header(&cell.to_string()))
            .collect();

        // calamine 的行宽与区域对齐, 不存在短行; 只剔除全空白行
        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = HashMap::new();
            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }
            rows.push(row_map);
        }

        Ok(SourceTable {
            headers,
            rows,
            skipped_short_rows: 0,
        })
    }
}

// ==========================================
// 通用读取器（根据扩展名自动选择）
// ==========================================
pub struct UniversalSourceReader;

impl UniversalSourceReader {
    /// 读取必需数据源, 文件缺失即报错
    pub fn read_required<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<SourceTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvSourceReader.read_table(path),
            "xlsx" | "xls" => ExcelSourceReader.read_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// 读取可选数据源, 文件缺失按空表处理（对账继续, 相应字段留空）
    pub fn read_optional<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<SourceTable> {
        let path = file_path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "可选数据源缺失, 按空表处理");
            return Ok(SourceTable::default());
        }
        let table = self.read_required(path)?;
        debug!(
            path = %path.display(),
            rows = table.rows.len(),
            skipped = table.skipped_short_rows,
            "数据源读取完成"
        );
        Ok(table)
    }
}
