// ==========================================
// 仓库库存看板系统 - 批量 upsert 写入器
// ==========================================
// 规则: 每批 100 条, 串行提交, 第 N+1 批必须等第 N 批落定;
//       单批失败记录批序号并继续, 其余批不受影响
// 红线: processed + errored 必须等于 total, 不允许静默丢批
// ==========================================

use crate::domain::ProductRecord;
use crate::store::item_store::ItemStore;
use serde::Serialize;
use tracing::{debug, error, info};

/// 每批写入的商品数
pub const UPSERT_BATCH_SIZE: usize = 100;

/// 单批失败详情
#[derive(Debug, Clone, Serialize)]
pub struct BatchError {
    pub batch_index: usize, // 批序号（从 0 起）
    pub size: usize,        // 该批商品数
    pub message: String,    // 失败原因
}

/// 批量写入报告
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpsertReport {
    pub total: usize,                  // 待写入总数
    pub batches: usize,                // 批数
    pub processed: usize,              // 成功写入数
    pub errored: usize,                // 失败数（按批计入）
    pub batch_errors: Vec<BatchError>, // 失败批明细
}

impl UpsertReport {
    /// 账目核对: 成功 + 失败 必须覆盖全部输入
    pub fn is_complete(&self) -> bool {
        self.processed + self.errored == self.total
    }
}

// ==========================================
// UpsertWriter
// ==========================================
pub struct UpsertWriter;

impl UpsertWriter {
    /// 把商品列表按固定批量串行 upsert 进存储
    ///
    /// # 参数
    /// - store: 目标存储
    /// - products: 商品列表（调用方已去重）
    ///
    /// # 返回
    /// - UpsertReport: 全量账目（不因单批失败而提前返回）
    pub async fn upsert_in_batches(
        store: &dyn ItemStore,
        products: &[ProductRecord],
    ) -> UpsertReport {
        let mut report = UpsertReport {
            total: products.len(),
            ..Default::default()
        };

        for (batch_index, chunk) in products.chunks(UPSERT_BATCH_SIZE).enumerate() {
            report.batches += 1;
            match store.upsert_item_master(chunk).await {
                Ok(count) => {
                    report.processed += count;
                    debug!(batch = batch_index, count = count, "批次写入成功");
                }
                Err(e) => {
                    report.errored += chunk.len();
                    error!(batch = batch_index, size = chunk.len(), error = %e, "批次写入失败");
                    report.batch_errors.push(BatchError {
                        batch_index,
                        size: chunk.len(),
                        message: e.to_string(),
                    });
                }
            }
        }

        info!(
            total = report.total,
            batches = report.batches,
            processed = report.processed,
            errored = report.errored,
            "批量写入完成"
        );
        report
    }
}
