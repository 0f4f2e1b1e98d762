// ==========================================
// 仓库库存看板系统 - 领域类型定义
// ==========================================
// 职责: 仓库分部、商品状态、任务状态等枚举
// 红线: 序列化字符串与数据库/种子文件保持一致,
//       历史数据中的简写与未知值必须宽容回落, 不得报错
// ==========================================

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 仓库分部 (Warehouse)
// ==========================================
// 序列化格式: 完整分部名（与看板展示、数据库 warehouse 列一致）
// 宽容解析: 历史种子文件中存在简写 "Retail"; 未知值回落 Teamwear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Warehouse {
    Teamwear, // 队服仓
    Retail,   // 零售仓
}

impl Warehouse {
    /// 完整分部名（展示与持久化格式）
    pub fn division_name(&self) -> &'static str {
        match self {
            Warehouse::Teamwear => "Courtside Teamwear",
            Warehouse::Retail => "Courtside Retail",
        }
    }

    /// 宽容解析: 接受完整分部名与历史简写, 未知值回落 Teamwear
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "Courtside Retail" | "Retail" => Warehouse::Retail,
            _ => Warehouse::Teamwear,
        }
    }
}

impl Default for Warehouse {
    fn default() -> Self {
        Warehouse::Teamwear
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.division_name())
    }
}

impl Serialize for Warehouse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.division_name())
    }
}

impl<'de> Deserialize<'de> for Warehouse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Warehouse::parse_lenient(&value))
    }
}

// ==========================================
// 商品状态 (Product Status)
// ==========================================
// 宽容解析: 历史数据缺失或未知状态一律按 Active 处理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    Active,   // 在售
    Inactive, // 停售
    Archived, // 归档
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
            ProductStatus::Archived => "Archived",
        }
    }

    /// 宽容解析: 未知值回落 Active
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "Inactive" => ProductStatus::Inactive,
            "Archived" => ProductStatus::Archived,
            _ => ProductStatus::Active,
        }
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        ProductStatus::Active
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ProductStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(ProductStatus::parse_lenient(&value))
    }
}

// ==========================================
// 任务状态 (Task Status)
// ==========================================
// 序列化格式: 看板展示用的英文短语
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "Open",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Complete => "Complete",
        }
    }

    /// 宽容解析: 未知值回落 Open
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim() {
            "In Progress" => TaskStatus::InProgress,
            "Complete" => TaskStatus::Complete,
            _ => TaskStatus::Open,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
