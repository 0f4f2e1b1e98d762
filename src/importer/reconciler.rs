// ==========================================
// 仓库库存看板系统 - 多源对账引擎
// ==========================================
// 流程: 名称表 → 条码表(按优先级) → 数量表 三趟合并
// 红线: 条码 first-writer-wins, 低优先级源不得覆盖已有条码;
//       名称为最后写入生效; 数量表每个有效行必出一条库存明细;
//       相同输入必须产出相同结果(与源文件行序、目录序无关的部分)
// ==========================================

use crate::domain::{InventoryRecord, ProductRecord, Warehouse};
use crate::engine::image_resolver::ImageIndex;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::source_reader::RawRow;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};
use uuid::Uuid;

// ==========================================
// 输入: 对账数据源
// ==========================================

/// 单个条码数据源（带标签, 优先级按 Vec 顺序从高到低）
#[derive(Debug, Clone)]
pub struct BarcodeSource {
    pub label: String,
    pub rows: Vec<RawRow>,
}

impl BarcodeSource {
    pub fn new(label: &str, rows: Vec<RawRow>) -> Self {
        BarcodeSource {
            label: label.to_string(),
            rows,
        }
    }
}

/// 对账输入: 三类数据源的行集合
///
/// 行集合均为已读取的表数据; 文件缺失的可选源在读取层已折算为空集。
#[derive(Debug, Clone, Default)]
pub struct ReconcileSources {
    pub names: Vec<RawRow>,                  // 商品名表（Item Number, Description）
    pub barcode_sources: Vec<BarcodeSource>, // 条码表, 先到先得
    pub quantities: Vec<RawRow>,             // 数量表（SKU, Bin, Quantity）
}

// ==========================================
// 输出: 对账结果与统计
// ==========================================

/// 对账统计
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReconcileStats {
    pub name_rows_applied: usize,     // 写入名称的行数
    pub barcode_rows_applied: usize,  // 成功赋条码的行数
    pub barcode_conflicts: usize,     // 因已有条码而被拒绝的行数
    pub quantity_rows: usize,         // 产出库存明细的行数
    pub invalid_skus: usize,          // 各趟中 SKU 无效被跳过的行数
    pub products: usize,              // 商品总数
    pub defaulted_names: usize,       // 回填默认名的商品数
    pub images_resolved: usize,       // 匹配到商品图的商品数
}

/// 对账结果
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub run_id: String,                            // 本次对账标识
    pub warehouse: Warehouse,                      // 目标分部
    pub products: BTreeMap<String, ProductRecord>, // SKU → 商品（键序即产出序）
    pub inventory: Vec<InventoryRecord>,           // 库存明细（数量表行序）
    pub stats: ReconcileStats,
}

impl ReconcileOutcome {
    /// 按 SKU 升序导出商品列表
    pub fn sorted_products(&self) -> Vec<ProductRecord> {
        self.products.values().cloned().collect()
    }
}

/// 商品图处理策略
pub enum ImagePolicy<'a> {
    /// 不处理图片（旧数据源无图）
    None,
    /// 只解析 web 路径, 不复制文件（看板引导导入）
    Resolve(&'a ImageIndex),
    /// 解析并复制进静态资源目录（脚本导入）
    ResolveAndCopy(&'a ImageIndex, &'a Path),
}

// ==========================================
// ProductReconciler - 对账引擎
// ==========================================
pub struct ProductReconciler {
    mapper: FieldMapper,
    warehouse: Warehouse,
}

impl ProductReconciler {
    pub fn new(warehouse: Warehouse) -> Self {
        ProductReconciler {
            mapper: FieldMapper,
            warehouse,
        }
    }

    /// 执行三趟对账
    ///
    /// # 参数
    /// - sources: 三类数据源
    /// - image_policy: 商品图处理策略
    ///
    /// # 返回
    /// - ReconcileOutcome: 商品主数据 + 库存明细 + 统计
    pub fn reconcile(
        &self,
        sources: &ReconcileSources,
        image_policy: ImagePolicy<'_>,
    ) -> ReconcileOutcome {
        let run_id = Uuid::new_v4().to_string();
        info!(
            run_id = %run_id,
            warehouse = %self.warehouse,
            name_rows = sources.names.len(),
            barcode_sources = sources.barcode_sources.len(),
            quantity_rows = sources.quantities.len(),
            "开始对账"
        );

        let mut products: BTreeMap<String, ProductRecord> = BTreeMap::new();
        let mut stats = ReconcileStats::default();

        // === 第一趟: 名称表 ===
        // 同一 SKU 多次出现时最后一行生效
        for row in &sources.names {
            let sku = match self.mapper.get_sku(row) {
                Some(sku) => sku,
                None => {
                    stats.invalid_skus += 1;
                    continue;
                }
            };
            let product = products
                .entry(sku.clone())
                .or_insert_with(|| ProductRecord::stub(&sku, self.warehouse));
            if let Some(name) = self.mapper.get_string(row, "Description") {
                product.name = name;
                stats.name_rows_applied += 1;
            }
        }
        debug!(applied = stats.name_rows_applied, "名称表合并完成");

        // === 第二趟: 条码表（按源优先级, 先到先得） ===
        for source in &sources.barcode_sources {
            let mut applied = 0usize;
            for row in &source.rows {
                let sku = match self.mapper.get_sku(row) {
                    Some(sku) => sku,
                    None => {
                        stats.invalid_skus += 1;
                        continue;
                    }
                };
                let barcode = match self.mapper.get_string(row, "Barcode") {
                    Some(b) => b,
                    None => continue,
                };
                let product = products
                    .entry(sku.clone())
                    .or_insert_with(|| ProductRecord::stub(&sku, self.warehouse));
                if product.barcode.is_none() {
                    product.barcode = Some(barcode);
                    applied += 1;
                } else {
                    stats.barcode_conflicts += 1;
                }
            }
            stats.barcode_rows_applied += applied;
            debug!(source = %source.label, applied = applied, "条码表合并完成");
        }

        // === 第三趟: 数量表 ===
        // 每个有效行产出一条库存明细; 主数据缺失的 SKU 补建占位商品
        let mut inventory = Vec::new();
        for row in &sources.quantities {
            let sku = match self.mapper.get_sku(row) {
                Some(sku) => sku,
                None => {
                    stats.invalid_skus += 1;
                    continue;
                }
            };
            products
                .entry(sku.clone())
                .or_insert_with(|| ProductRecord::stub(&sku, self.warehouse));
            inventory.push(InventoryRecord {
                sku,
                bin: self.mapper.get_bin(row),
                quantity: self.mapper.get_quantity(row),
                warehouse: self.warehouse,
            });
        }
        stats.quantity_rows = inventory.len();
        debug!(records = inventory.len(), "数量表合并完成");

        // === 收尾: 默认名回填 + 商品图解析 ===
        for product in products.values_mut() {
            if product.name.is_empty() {
                product.name = ProductRecord::default_name(&product.sku);
                stats.defaulted_names += 1;
            }
            if product.image.is_none() {
                product.image = match &image_policy {
                    ImagePolicy::None => None,
                    ImagePolicy::Resolve(index) => index.resolve_web_path(&product.sku),
                    ImagePolicy::ResolveAndCopy(index, public_dir) => {
                        index.resolve_and_copy(&product.sku, public_dir)
                    }
                };
                if product.image.is_some() {
                    stats.images_resolved += 1;
                }
            }
        }
        stats.products = products.len();

        info!(
            run_id = %run_id,
            products = stats.products,
            inventory = stats.quantity_rows,
            defaulted_names = stats.defaulted_names,
            barcode_conflicts = stats.barcode_conflicts,
            "对账完成"
        );

        ReconcileOutcome {
            run_id,
            warehouse: self.warehouse,
            products,
            inventory,
            stats,
        }
    }
}
