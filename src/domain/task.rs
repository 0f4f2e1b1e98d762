// ==========================================
// 仓库库存看板系统 - 仓库任务模型
// ==========================================
// 用途: 看板任务列表（补货、盘点、上架等）
// ==========================================

use crate::domain::types::TaskStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseTask {
    pub id: String,                   // 任务唯一标识（UUID）
    pub title: String,                // 任务标题
    #[serde(default)]
    pub description: String,          // 任务说明
    #[serde(default)]
    pub assigned_to: Option<String>,  // 负责人
    #[serde(default)]
    pub due_date: Option<NaiveDate>,  // 截止日期
    pub status: TaskStatus,           // 任务状态
}
