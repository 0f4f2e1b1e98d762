// ==========================================
// 仓库库存看板系统 - 看板查询 API
// ==========================================
// 职责: 款式分组视图、汇总数字、任务列表的只读查询
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::{StyleGroup, WarehouseTask};
use crate::engine::style_group::group_products;
use crate::store::item_store::ItemStore;
use serde::Serialize;
use std::sync::Arc;

/// 看板首页汇总
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub items: usize,             // 商品主数据总数
    pub styles: usize,            // 款式组数
    pub inventory_records: usize, // 库存明细条数
    pub total_quantity: i64,      // 在库总件数
}

// ==========================================
// DashboardApi
// ==========================================
pub struct DashboardApi<S: ItemStore> {
    store: Arc<S>,
}

impl<S: ItemStore> DashboardApi<S> {
    pub fn new(store: Arc<S>) -> Self {
        DashboardApi { store }
    }

    /// 款式分组视图（变体已按尺码排序, 组按款式编码排序）
    pub async fn style_groups(&self) -> ApiResult<Vec<StyleGroup>> {
        let products = self.store.list_item_master().await?;
        let inventory = self.store.list_inventory().await?;
        Ok(group_products(&products, &inventory))
    }

    /// 首页汇总数字
    pub async fn summary(&self) -> ApiResult<DashboardSummary> {
        let items = self.store.count_item_master().await?;
        let inventory = self.store.list_inventory().await?;
        let products = self.store.list_item_master().await?;
        let styles = group_products(&products, &inventory).len();
        Ok(DashboardSummary {
            items,
            styles,
            inventory_records: inventory.len(),
            total_quantity: inventory.iter().map(|r| r.quantity).sum(),
        })
    }

    /// 任务列表（按截止日期升序）
    pub async fn tasks(&self) -> ApiResult<Vec<WarehouseTask>> {
        Ok(self.store.list_tasks().await?)
    }
}
