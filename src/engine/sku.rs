// ==========================================
// 仓库库存看板系统 - SKU 拆解与尺码排序
// ==========================================
// 规则: SKU 以 "-" 分段; 三段及以上取前两段为款式编码,
//       其余段合并为尺码; 不足三段整体视为款式, 尺码记 "OS"
// ==========================================

/// 尺码榜: 已知尺码按此顺序排列, 榜外尺码排在榜内之后
pub const SIZE_ORDER: [&str; 10] = [
    "XXS", "XS", "S", "M", "L", "XL", "2XL", "3XL", "4XL", "5XL",
];

/// 单段/双段 SKU 的默认尺码（One Size）
pub const ONE_SIZE: &str = "OS";

/// SKU 拆解结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkuParts {
    pub style: String, // 款式编码
    pub size: String,  // 尺码段
}

/// 拆解 SKU 为款式编码与尺码
///
/// # 规则
/// - `"AB-CD-XL"` → style `"AB-CD"`, size `"XL"`
/// - `"AB-CD-2-XL"` → style `"AB-CD"`, size `"2-XL"`（剩余段保留连字符合并）
/// - `"AB-CD"` / `"ABCD"` → style 为整个 SKU, size `"OS"`
pub fn decompose_sku(sku: &str) -> SkuParts {
    let parts: Vec<&str> = sku.split('-').collect();
    if parts.len() >= 3 {
        SkuParts {
            style: parts[..2].join("-"),
            size: parts[2..].join("-"),
        }
    } else {
        SkuParts {
            style: sku.to_string(),
            size: ONE_SIZE.to_string(),
        }
    }
}

/// 尺码排序键
///
/// 派生的 Ord 恰好给出需要的顺序: 榜内尺码(按榜位)在前,
/// 榜外尺码在后(按字典序)。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeKey {
    Ranked(usize),
    Unranked(String),
}

/// 计算尺码的排序键（榜内精确匹配, 区分大小写）
pub fn size_sort_key(size: &str) -> SizeKey {
    match SIZE_ORDER.iter().position(|s| *s == size) {
        Some(rank) => SizeKey::Ranked(rank),
        None => SizeKey::Unranked(size.to_string()),
    }
}
