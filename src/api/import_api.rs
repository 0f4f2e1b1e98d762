// ==========================================
// 仓库库存看板系统 - 引导导入 API
// ==========================================
// 流程: 表头校验 → 字段映射 → SKU 去重(后行生效) → 图片解析
//       → 每批 100 条串行 upsert
// 红线: 同一时刻只允许一个导入在执行, 任何退出路径都必须释放占用;
//       单批失败不终止导入, 最终账目必须覆盖全部输入
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::{ProductRecord, ProductStatus, RawItemRecord, Warehouse};
use crate::engine::image_resolver::ImageIndex;
use crate::i18n::{t, t_with_args};
use crate::importer::field_mapper::FieldMapper;
use crate::importer::source_reader::UniversalSourceReader;
use crate::store::item_store::ItemStore;
use crate::writer::seed_writer::UNKNOWN_PRODUCT_NAME;
use crate::writer::upsert_writer::{BatchError, UpsertWriter};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// 引导导入要求的必需列
pub const REQUIRED_SETUP_HEADERS: [&str; 3] = ["Item Number", "Description", "Barcode"];

/// 引导导入请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetupImportRequest {
    pub file_path: String,         // 清单文件路径（.csv/.xlsx/.xls）
    pub warehouse: Warehouse,      // 目标分部
    pub image_dir: Option<String>, // 可选图片目录（只解析 web 路径, 不复制）
}

/// 引导导入响应
#[derive(Debug, Clone, Serialize)]
pub struct SetupImportResponse {
    pub run_id: String,                // 本次导入标识
    pub total_rows: usize,             // 文件中的数据行数
    pub skipped_rows: usize,           // 短行 + 无效 SKU 行
    pub unique_items: usize,           // 去重后的商品数
    pub processed: usize,              // 成功写入数
    pub errored: usize,                // 失败数
    pub batch_errors: Vec<BatchError>, // 失败批明细
    pub log: Vec<String>,              // 逐步日志（看板进度面板展示）
    pub elapsed_ms: i64,               // 耗时（毫秒）
}

// 占用标记的 RAII 释放句柄: 无论成功/报错/提前返回都会归还
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlightGuard { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

// ==========================================
// ImportApi
// ==========================================
pub struct ImportApi<S: ItemStore> {
    store: Arc<S>,
    in_flight: AtomicBool,
}

impl<S: ItemStore> ImportApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        ImportApi {
            store,
            in_flight: AtomicBool::new(false),
        }
    }

    /// 当前是否有导入在执行（看板用于置灰导入按钮）
    pub fn is_import_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// 执行引导导入
    ///
    /// # 参数
    /// - request: 文件路径 + 目标分部 + 可选图片目录
    ///
    /// # 返回
    /// - Ok(SetupImportResponse): 全量账目与逐步日志
    /// - Err(ApiError::ImportInFlight): 已有导入在执行
    /// - Err(ApiError::ValidationError): 文件缺失/格式不支持/必需列缺失/无有效行
    pub async fn import_items_file(
        &self,
        request: &SetupImportRequest,
    ) -> ApiResult<SetupImportResponse> {
        let _guard =
            InFlightGuard::try_acquire(&self.in_flight).ok_or(ApiError::ImportInFlight)?;

        let started = Instant::now();
        let run_id = Uuid::new_v4().to_string();
        let mut log: Vec<String> = Vec::new();
        info!(run_id = %run_id, file = %request.file_path, warehouse = %request.warehouse, "开始引导导入");

        // === 步骤 1: 读取文件 ===
        let table = UniversalSourceReader.read_required(Path::new(&request.file_path))?;

        // === 步骤 2: 表头校验 ===
        let missing = table.missing_headers(&REQUIRED_SETUP_HEADERS);
        if !missing.is_empty() {
            let message = t_with_args(
                "import.missing_headers",
                &[
                    ("missing", missing.join(", ").as_str()),
                    ("found", table.headers.join(", ").as_str()),
                ],
            );
            warn!(run_id = %run_id, missing = ?missing, "表头校验失败");
            return Err(ApiError::ValidationError(message));
        }

        // === 步骤 3: 字段映射 + SKU 去重（后行生效） ===
        let mapper = FieldMapper;
        let mut skipped_rows = table.skipped_short_rows;
        let mut deduped: BTreeMap<String, RawItemRecord> = BTreeMap::new();
        for row in &table.rows {
            match mapper.map_item_row(row) {
                Some(record) => {
                    deduped.insert(record.sku.clone(), record);
                }
                None => skipped_rows += 1,
            }
        }
        if deduped.is_empty() {
            return Err(ApiError::ValidationError(t("import.no_valid_rows")));
        }

        let total_rows = table.rows.len();
        let unique_items = deduped.len();
        log.push(t_with_args(
            "import.loaded_rows",
            &[
                ("total", total_rows.to_string().as_str()),
                ("unique", unique_items.to_string().as_str()),
            ],
        ));

        // === 步骤 4: 图片解析（可选, 只取 web 路径） ===
        let image_index = request
            .image_dir
            .as_ref()
            .map(|dir| ImageIndex::scan(Path::new(dir)));

        let products: Vec<ProductRecord> = deduped
            .into_values()
            .map(|record| ProductRecord {
                image: image_index
                    .as_ref()
                    .and_then(|index| index.resolve_web_path(&record.sku)),
                name: record
                    .name
                    .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string()),
                barcode: record.barcode,
                warehouse: request.warehouse,
                status: ProductStatus::Active,
                sku: record.sku,
            })
            .collect();

        // === 步骤 5: 批量 upsert（串行, 单批失败不终止） ===
        let report = UpsertWriter::upsert_in_batches(self.store.as_ref(), &products).await;
        for batch_error in &report.batch_errors {
            log.push(t_with_args(
                "import.batch_failed",
                &[
                    ("index", batch_error.batch_index.to_string().as_str()),
                    ("error", batch_error.message.as_str()),
                ],
            ));
        }
        log.push(t_with_args(
            "import.completed",
            &[
                ("processed", report.processed.to_string().as_str()),
                ("errored", report.errored.to_string().as_str()),
            ],
        ));

        let elapsed_ms = started.elapsed().as_millis() as i64;
        info!(
            run_id = %run_id,
            unique_items = unique_items,
            processed = report.processed,
            errored = report.errored,
            elapsed_ms = elapsed_ms,
            "引导导入完成"
        );

        Ok(SetupImportResponse {
            run_id,
            total_rows,
            skipped_rows,
            unique_items,
            processed: report.processed,
            errored: report.errored,
            batch_errors: report.batch_errors,
            log,
            elapsed_ms,
        })
    }
}
