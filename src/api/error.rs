// ==========================================
// 仓库库存看板系统 - API 层错误类型
// ==========================================
// 职责: 把导入层/存储层错误转换为面向看板的错误消息
// ==========================================

use crate::importer::error::ImportError;
use crate::store::error::StoreError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 并发控制 =====
    #[error("已有导入任务正在执行，请等待其完成")]
    ImportInFlight,

    // ===== 输入与校验 =====
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据校验失败: {0}")]
    ValidationError(String),

    // ===== 业务执行 =====
    #[error("导入失败: {0}")]
    ImportFailed(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ===== 数据访问 =====
    #[error("数据库错误: {0}")]
    DatabaseError(String),

    // ===== 通用 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 导入层错误: 文件缺失/格式/表头问题属于调用方可修正的校验错误
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::FileNotFound(_)
            | ImportError::UnsupportedFormat(_)
            | ImportError::MissingHeaders { .. } => ApiError::ValidationError(err.to_string()),
            _ => ApiError::ImportFailed(err.to_string()),
        }
    }
}

// 存储层错误
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{} (id={})", entity, id))
            }
            _ => ApiError::DatabaseError(err.to_string()),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
