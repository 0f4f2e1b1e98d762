// ==========================================
// 仓库库存看板系统 - 数据目录与数据库路径
// ==========================================
// 规则: 环境变量显式指定优先; 否则用系统用户数据目录,
//       开发构建与生产构建使用不同子目录, 互不污染
// ==========================================

use std::path::PathBuf;

/// 显式指定数据库路径的环境变量（调试/测试/CI 使用）
pub const DB_PATH_ENV: &str = "WAREHOUSE_INVENTORY_DB_PATH";

/// 数据库文件名
pub const DB_FILE_NAME: &str = "warehouse_inventory.db";

/// 应用数据目录
///
/// # 返回
/// - 开发构建: 用户数据目录/warehouse-inventory-dev
/// - 生产构建: 用户数据目录/warehouse-inventory
/// - 拿不到用户数据目录时回退当前目录
pub fn get_default_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        #[cfg(debug_assertions)]
        let path = data_dir.join("warehouse-inventory-dev");

        #[cfg(not(debug_assertions))]
        let path = data_dir.join("warehouse-inventory");

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        return path;
    }
    PathBuf::from(".")
}

/// 默认数据库路径
///
/// 环境变量 `WAREHOUSE_INVENTORY_DB_PATH` 非空时直接使用。
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    get_default_data_dir()
        .join(DB_FILE_NAME)
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_db_path_ends_with_db() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
