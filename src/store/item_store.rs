// ==========================================
// 仓库库存看板系统 - 商品存储 Trait
// ==========================================
// 职责: 定义商品主数据/库存明细/任务的数据访问接口
// 红线: Repository 不含对账规则, 只做数据 CRUD
// ==========================================

use crate::domain::{InventoryRecord, ProductRecord, Warehouse, WarehouseTask};
use crate::store::error::StoreResult;
use async_trait::async_trait;

// ==========================================
// ItemStore Trait
// ==========================================
// 用途: 商品主数据与库存明细的数据访问
// 实现者: SqliteItemStore（使用 rusqlite）
#[async_trait]
pub trait ItemStore: Send + Sync {
    // ===== 商品主数据 =====

    /// 批量 upsert 商品主数据（ON CONFLICT(sku) DO UPDATE 策略）
    ///
    /// # 参数
    /// - products: 商品列表（SKU 为唯一键）
    ///
    /// # 返回
    /// - Ok(usize): 写入的记录数（新增 + 更新）
    /// - Err: 数据库错误（整个事务回滚, 本批全部失败）
    async fn upsert_item_master(&self, products: &[ProductRecord]) -> StoreResult<usize>;

    /// 读取全部商品主数据（按 SKU 升序）
    async fn list_item_master(&self) -> StoreResult<Vec<ProductRecord>>;

    /// 商品主数据总数
    async fn count_item_master(&self) -> StoreResult<usize>;

    // ===== 库存明细 =====

    /// 整体替换某分部的库存明细（事务内先删后插, 重复导入幂等）
    ///
    /// # 参数
    /// - warehouse: 目标分部
    /// - records: 该分部的全量库存明细
    ///
    /// # 返回
    /// - Ok(usize): 插入的明细数
    async fn replace_inventory(
        &self,
        warehouse: Warehouse,
        records: &[InventoryRecord],
    ) -> StoreResult<usize>;

    /// 读取全部库存明细
    async fn list_inventory(&self) -> StoreResult<Vec<InventoryRecord>>;

    // ===== 仓库任务 =====

    /// upsert 单个任务
    async fn upsert_task(&self, task: &WarehouseTask) -> StoreResult<()>;

    /// 读取全部任务（按截止日期升序, 无日期的排最后）
    async fn list_tasks(&self) -> StoreResult<Vec<WarehouseTask>>;
}
