// ==========================================
// 仓库库存看板系统 - 字段映射器
// ==========================================
// 职责: 源列名 → 标准字段映射 + 宽容的值归一化
// 规则: 数量解析失败按 0; 库位 "*" 归一为 "Unassigned";
//       与表头同文的值(串联导出残留)不算有效 SKU
// ==========================================

use crate::domain::{RawItemRecord, UNASSIGNED_BIN};
use crate::importer::source_reader::RawRow;

/// 历史导出中残留的表头字面量, 出现在数据区时按无效 SKU 处理
const HEADER_LITERALS: [&str; 2] = ["SKU", "Item Number"];

pub struct FieldMapper;

impl FieldMapper {
    /// 提取字符串字段（返回 Option）, 支持多个可能的列名（别名）
    ///
    /// 数量表/条码表用 `SKU` 列, 商品名表与部分条码表用 `Item Number` 列,
    /// 零售/队服导出存在小写列名, 统一在这里吸收。
    pub fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        // 定义列名别名映射
        let aliases: Vec<&str> = match key {
            "SKU" => vec!["SKU", "sku", "Item Number"],
            "Description" => vec!["Description", "description", "Name", "name"],
            "Barcode" => vec!["Barcode", "barcode"],
            "Bin" => vec!["Bin", "bin"],
            "Quantity" => vec!["Quantity", "quantity"],
            _ => vec![key],
        };

        // 尝试所有可能的列名
        for alias in aliases {
            if let Some(v) = row.get(alias) {
                let trimmed = v.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
        None
    }

    /// SKU 是否有效: 非空且不是表头字面量
    pub fn is_valid_sku(&self, sku: &str) -> bool {
        let trimmed = sku.trim();
        !trimmed.is_empty() && !HEADER_LITERALS.contains(&trimmed)
    }

    /// 提取有效 SKU（无效返回 None）
    pub fn get_sku(&self, row: &RawRow) -> Option<String> {
        self.get_string(row, "SKU")
            .filter(|sku| self.is_valid_sku(sku))
    }

    /// 解析数量: 整数优先, 小数截断, 失败按 0, 负数钳为 0
    ///
    /// 库存导出常见 "5"、"5.0"、空串、"N/A" 等形态, 一律吸收不报错。
    pub fn parse_quantity(&self, value: &str) -> i64 {
        let trimmed = value.trim();
        let parsed = trimmed
            .parse::<i64>()
            .or_else(|_| trimmed.parse::<f64>().map(|f| f as i64))
            .unwrap_or(0);
        parsed.max(0)
    }

    /// 提取数量字段（列缺失/空值/非法值均为 0）
    pub fn get_quantity(&self, row: &RawRow) -> i64 {
        match self.get_string(row, "Quantity") {
            Some(value) => self.parse_quantity(&value),
            None => 0,
        }
    }

    /// 库位归一化: "*" 表示未分配, 统一为 "Unassigned"
    pub fn normalize_bin(&self, bin: &str) -> String {
        let trimmed = bin.trim();
        if trimmed == "*" {
            UNASSIGNED_BIN.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// 提取库位字段（缺失为空串, 看板展示为"无库位"）
    pub fn get_bin(&self, row: &RawRow) -> String {
        match self.get_string(row, "Bin") {
            Some(value) => self.normalize_bin(&value),
            None => String::new(),
        }
    }

    /// 该行是否携带库存信息（库位或数量任一非空）
    ///
    /// 用户导出的条目表里纯主数据行没有库存, 不应产出数量为 0 的明细。
    pub fn has_inventory_fields(&self, row: &RawRow) -> bool {
        self.get_string(row, "Bin").is_some() || self.get_string(row, "Quantity").is_some()
    }

    /// 把引导导入/零售导出的一行映射为中间记录
    ///
    /// SKU 无效的行返回 None, 由调用方计入跳过统计。
    pub fn map_item_row(&self, row: &RawRow) -> Option<RawItemRecord> {
        let sku = self.get_sku(row)?;
        Some(RawItemRecord {
            sku,
            name: self.get_string(row, "Description"),
            barcode: self.get_string(row, "Barcode"),
            bin: self.get_string(row, "Bin").map(|b| self.normalize_bin(&b)),
            quantity: self
                .get_string(row, "Quantity")
                .map(|q| self.parse_quantity(&q)),
        })
    }
}
