// ==========================================
// 仓库库存看板系统 - 款式分组模型
// ==========================================
// 用途: 看板"按款式聚合"视图的输出形态
// 红线: 分组与排序规则在 engine::style_group 实现, 本层只定义形状
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// SizedVariant - 款式下的单尺码变体
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizedVariant {
    pub sku: String,             // 完整 SKU
    pub size: String,            // 尺码段（单段 SKU 为 "OS"）
    pub name: String,            // 商品名称
    pub barcode: Option<String>, // 条码
    pub image: Option<String>,   // 商品图 web 路径
    pub quantity: i64,           // 各库位数量之和（无库存记录为 0）
}

// ==========================================
// StyleGroup - 款式分组
// ==========================================
// 组名/组图取排序后首个可用变体, 变体按尺码榜排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGroup {
    pub style: String,               // 款式编码（SKU 前两段, 单段 SKU 为其本身）
    pub name: String,                // 分组展示名
    pub image: Option<String>,       // 分组展示图
    pub variants: Vec<SizedVariant>, // 已按尺码排序
    pub total_quantity: i64,         // 全组数量合计
}
