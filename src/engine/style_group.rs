// ==========================================
// 仓库库存看板系统 - 款式分组
// ==========================================
// 规则: 商品按 SKU 前两段聚合成款式组, 组内变体按尺码榜排序;
//       组名取首个入组商品, 组图取首个有图商品
// 红线: 组顺序必须确定; 每款每尺码只保留一个变体,
//       重复尺码只回填缺失条码, 不覆盖已保留变体
// ==========================================

use crate::domain::{InventoryRecord, ProductRecord, SizedVariant, StyleGroup};
use crate::engine::sku::{decompose_sku, size_sort_key};
use std::collections::{BTreeMap, HashMap};

/// 把商品主数据与库存明细聚合成款式分组
///
/// - `products`: 对账后的商品主数据（SKU 唯一）
/// - `inventory`: 库存明细, 同一 SKU 的多库位数量在此求和
///
/// 返回按款式编码排序的分组列表。
pub fn group_products(
    products: &[ProductRecord],
    inventory: &[InventoryRecord],
) -> Vec<StyleGroup> {
    // SKU → 总数量
    let mut quantities: HashMap<&str, i64> = HashMap::new();
    for record in inventory {
        *quantities.entry(record.sku.as_str()).or_insert(0) += record.quantity;
    }

    // 款式编码 → 分组（BTreeMap 保证组顺序确定）
    let mut groups: BTreeMap<String, StyleGroup> = BTreeMap::new();
    for product in products {
        let parts = decompose_sku(&product.sku);
        let group = groups.entry(parts.style.clone()).or_insert_with(|| StyleGroup {
            style: parts.style.clone(),
            name: product.name.clone(),
            image: None,
            variants: Vec::new(),
            total_quantity: 0,
        });

        // 组图取首个有图商品
        if group.image.is_none() && product.image.is_some() {
            group.image = product.image.clone();
        }

        // 同尺码重复(如 "AB-CD" 与 "AB-CD-OS" 同落 OS 档):
        // 保留先入组变体, 仅回填其缺失条码; 数量不重复计入
        if let Some(existing) = group.variants.iter_mut().find(|v| v.size == parts.size) {
            if existing.barcode.is_none() && product.barcode.is_some() {
                existing.barcode = product.barcode.clone();
            }
            continue;
        }

        let quantity = quantities.get(product.sku.as_str()).copied().unwrap_or(0);
        group.total_quantity += quantity;
        group.variants.push(SizedVariant {
            sku: product.sku.clone(),
            size: parts.size,
            name: product.name.clone(),
            barcode: product.barcode.clone(),
            image: product.image.clone(),
            quantity,
        });
    }

    // 组内按尺码榜排序
    let mut result: Vec<StyleGroup> = groups.into_values().collect();
    for group in &mut result {
        group.variants.sort_by_key(|v| size_sort_key(&v.size));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductStatus, Warehouse};

    fn product(sku: &str, name: &str, image: Option<&str>) -> ProductRecord {
        ProductRecord {
            sku: sku.to_string(),
            name: name.to_string(),
            barcode: None,
            image: image.map(|s| s.to_string()),
            warehouse: Warehouse::Teamwear,
            status: ProductStatus::Active,
        }
    }

    fn stock(sku: &str, bin: &str, quantity: i64) -> InventoryRecord {
        InventoryRecord {
            sku: sku.to_string(),
            bin: bin.to_string(),
            quantity,
            warehouse: Warehouse::Teamwear,
        }
    }

    #[test]
    fn test_groups_by_first_two_segments() {
        let products = vec![
            product("AB-CD-M", "Pro Jersey", None),
            product("AB-CD-XL", "Pro Jersey", None),
            product("EF-GH-S", "Away Shorts", None),
        ];
        let groups = group_products(&products, &[]);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].style, "AB-CD");
        assert_eq!(groups[0].variants.len(), 2);
        assert_eq!(groups[1].style, "EF-GH");
    }

    #[test]
    fn test_variants_sorted_by_size_rank() {
        let products = vec![
            product("AB-CD-XL", "Pro Jersey", None),
            product("AB-CD-28", "Pro Jersey", None),
            product("AB-CD-S", "Pro Jersey", None),
            product("AB-CD-M", "Pro Jersey", None),
        ];
        let groups = group_products(&products, &[]);
        let sizes: Vec<&str> = groups[0].variants.iter().map(|v| v.size.as_str()).collect();
        assert_eq!(sizes, vec!["S", "M", "XL", "28"], "ranked sizes first, unranked after");
    }

    #[test]
    fn test_short_sku_is_own_group_with_one_size() {
        let products = vec![product("BALL", "Match Ball", None)];
        let groups = group_products(&products, &[]);
        assert_eq!(groups[0].style, "BALL");
        assert_eq!(groups[0].variants[0].size, "OS");
    }

    #[test]
    fn test_group_image_is_first_available() {
        let products = vec![
            product("AB-CD-S", "Pro Jersey", None),
            product("AB-CD-M", "Pro Jersey", Some("/product-images/AB-CD.jpg")),
            product("AB-CD-L", "Pro Jersey", Some("/product-images/other.jpg")),
        ];
        let groups = group_products(&products, &[]);
        assert_eq!(
            groups[0].image.as_deref(),
            Some("/product-images/AB-CD.jpg")
        );
    }

    #[test]
    fn test_quantities_summed_per_sku_and_group() {
        let products = vec![
            product("AB-CD-M", "Pro Jersey", None),
            product("AB-CD-L", "Pro Jersey", None),
        ];
        let inventory = vec![
            stock("AB-CD-M", "A1", 3),
            stock("AB-CD-M", "Unassigned", 2),
            stock("AB-CD-L", "B2", 4),
        ];
        let groups = group_products(&products, &inventory);
        let m = groups[0].variants.iter().find(|v| v.size == "M").unwrap();
        assert_eq!(m.quantity, 5, "multi-bin quantities should sum");
        assert_eq!(groups[0].total_quantity, 9);
    }

    #[test]
    fn test_duplicate_size_keeps_first_variant_and_backfills_barcode() {
        // "AB-CD"(双段) 与 "AB-CD-OS"(三段) 都落在 AB-CD 款式的 OS 档
        let mut first = product("AB-CD", "Scarf", None);
        first.barcode = None;
        let mut dup = product("AB-CD-OS", "Scarf Old Code", None);
        dup.barcode = Some("5000000000017".to_string());

        let inventory = vec![stock("AB-CD", "A1", 3), stock("AB-CD-OS", "A2", 8)];
        let groups = group_products(&[first, dup], &inventory);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].variants.len(), 1, "duplicate size must not add a variant");
        let kept = &groups[0].variants[0];
        assert_eq!(kept.sku, "AB-CD", "first product for the size wins");
        assert_eq!(kept.name, "Scarf");
        assert_eq!(
            kept.barcode.as_deref(),
            Some("5000000000017"),
            "missing barcode is backfilled from the duplicate"
        );
        assert_eq!(groups[0].total_quantity, 3, "dropped duplicate's stock is not counted");
    }

    #[test]
    fn test_group_order_is_deterministic() {
        let products = vec![
            product("ZZ-YY-M", "Last", None),
            product("AA-BB-M", "First", None),
        ];
        let groups = group_products(&products, &[]);
        assert_eq!(groups[0].style, "AA-BB");
        assert_eq!(groups[1].style, "ZZ-YY");
    }
}
