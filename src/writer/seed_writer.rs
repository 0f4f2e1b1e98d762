// ==========================================
// 仓库库存看板系统 - 种子文件读写
// ==========================================
// 产物: 看板前端消费的 JSON 种子（item_master + inventory 两个数组）
// 规则: 整文件覆盖写; 读取侧对历史产物宽容
//       (缺失字段回落默认值, 空名回填 "Unknown Product")
// ==========================================

use crate::domain::{InventoryRecord, ProductRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::reconciler::ReconcileOutcome;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// 读取历史产物时, 空名商品的回填名
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";

/// 种子文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedDocument {
    pub item_master: Vec<ProductRecord>,
    pub inventory: Vec<InventoryRecord>,
}

impl SeedDocument {
    /// 从对账结果构建种子（商品按 SKU 升序）
    pub fn from_outcome(outcome: &ReconcileOutcome) -> Self {
        SeedDocument {
            item_master: outcome.sorted_products(),
            inventory: outcome.inventory.clone(),
        }
    }

    /// 合并另一个种子（分部各自对账后拼接, 商品续接、库存续接）
    pub fn extend(&mut self, other: SeedDocument) {
        self.item_master.extend(other.item_master);
        self.inventory.extend(other.inventory);
    }
}

/// 写出种子文件（美化 JSON, 整文件覆盖）
///
/// 输出目录不存在时自动创建; 创建失败视为致命错误。
pub fn write_seed_file(path: &Path, doc: &SeedDocument) -> ImportResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ImportError::OutputDirError {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }
    let json = serde_json::to_string_pretty(doc)?;
    fs::write(path, json)?;
    info!(
        path = %path.display(),
        products = doc.item_master.len(),
        inventory = doc.inventory.len(),
        "种子文件写出完成"
    );
    Ok(())
}

/// 读取种子文件
///
/// 宽容规则在反序列化层（分部简写、字符串数量）之外,
/// 这里再补一条: 空名商品回填 "Unknown Product"。
pub fn read_seed_file(path: &Path) -> ImportResult<SeedDocument> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    let mut doc: SeedDocument = serde_json::from_str(&content)?;
    for product in &mut doc.item_master {
        if product.name.is_empty() {
            product.name = UNKNOWN_PRODUCT_NAME.to_string();
        }
    }
    Ok(doc)
}
