// ==========================================
// 仓库库存看板系统 - 商品领域模型
// ==========================================
// 职责: 商品主数据与库存明细的结构定义
// 红线: 对账规则(条码优先级、默认名回填)不在本层实现,
//       本层只定义数据形状与宽容反序列化
// ==========================================

use crate::domain::types::{ProductStatus, Warehouse};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductRecord - 商品主数据
// ==========================================
// 用途: 对账引擎输出, 每个 SKU 唯一一条
// 对齐: item_master 表 / 种子文件 item_master 数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    // ===== 主键 =====
    pub sku: String, // 完整 SKU（唯一键, 如 "AB-CD-XL"）

    // ===== 基础信息 =====
    #[serde(default)]
    pub name: String, // 商品名称（对账后为空时回填默认名）
    #[serde(default)]
    pub barcode: Option<String>, // 条码（无则为 null）
    #[serde(default)]
    pub image: Option<String>, // 商品图 web 路径（如 "/product-images/AB-CD.jpg"）

    // ===== 归属与状态 =====
    #[serde(default)]
    pub warehouse: Warehouse, // 所属分部（默认 Teamwear）
    #[serde(default)]
    pub status: ProductStatus, // 商品状态（默认 Active）
}

impl ProductRecord {
    /// 创建仅含 SKU 的占位记录, 其余字段待对账各阶段填充
    pub fn stub(sku: &str, warehouse: Warehouse) -> Self {
        ProductRecord {
            sku: sku.to_string(),
            name: String::new(),
            barcode: None,
            image: None,
            warehouse,
            status: ProductStatus::Active,
        }
    }

    /// 名称缺失时的默认名（对账路径: 数量表孤儿 SKU）
    pub fn default_name(sku: &str) -> String {
        format!("Product {}", sku)
    }
}

// ==========================================
// InventoryRecord - 库存明细
// ==========================================
// 用途: 每个 (SKU, 库位) 出现一条, 不做聚合
// 对齐: inventory 表 / 种子文件 inventory 数组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub sku: String, // 商品 SKU（允许主数据中不存在, 由对账引擎补建占位商品）
    #[serde(default)]
    pub bin: String, // 库位编码（"*" 已归一化为 "Unassigned"）
    #[serde(default, deserialize_with = "de_lenient_quantity")]
    pub quantity: i64, // 数量（非法值按 0, 负数按 0）
    #[serde(default)]
    pub warehouse: Warehouse, // 所属分部
}

/// 未分配库位的归一化名称
pub const UNASSIGNED_BIN: &str = "Unassigned";

// 历史种子文件中 quantity 既有数字也有字符串("12"), 反序列化时宽容处理
fn de_lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawQuantity {
        Int(i64),
        Float(f64),
        Text(String),
        Null(Option<()>),
    }

    let parsed = match RawQuantity::deserialize(deserializer)? {
        RawQuantity::Int(v) => v,
        RawQuantity::Float(v) if v.is_finite() => v as i64,
        RawQuantity::Float(_) => 0,
        RawQuantity::Text(s) => s.trim().parse::<i64>().unwrap_or(0),
        RawQuantity::Null(_) => 0,
    };
    Ok(parsed.max(0))
}

// ==========================================
// RawItemRecord - 引导导入的单行映射结果
// ==========================================
// 用途: source_reader 行 → 字段映射后的中间形态,
//       尚未去重、尚未回填默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawItemRecord {
    pub sku: String,              // 必填（无效行在映射前已剔除）
    pub name: Option<String>,     // Description/Name 列
    pub barcode: Option<String>,  // Barcode 列
    pub bin: Option<String>,      // Bin 列（零售/队服导出才有）
    pub quantity: Option<i64>,    // Quantity 列（零售/队服导出才有）
}
