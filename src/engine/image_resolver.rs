// ==========================================
// 仓库库存看板系统 - 商品图索引与匹配
// ==========================================
// 规则: 一次性扫描图片目录, 以"大写去扩展名文件名"为键建立索引;
//       解析时先精确命中, 再做连字符边界的前缀匹配
// 红线: 前缀匹配多键命中时取最长键, 结果必须与目录遍历顺序无关
// ==========================================

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// 识别为商品图的扩展名（不区分大小写）
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "gif"];

/// 看板静态资源里商品图的 web 路径前缀
pub const PUBLIC_IMAGE_PREFIX: &str = "/product-images";

/// 索引中的单个图片条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub file_name: String,    // 原始文件名（含扩展名）
    pub source_path: PathBuf, // 源文件完整路径
}

impl ImageEntry {
    /// 该图片在看板静态资源下的 web 路径
    pub fn web_path(&self) -> String {
        format!("{}/{}", PUBLIC_IMAGE_PREFIX, self.file_name)
    }
}

/// 商品图索引
///
/// 键为大写的去扩展名文件名, 如 `AB-CD.jpg` → `AB-CD`。
#[derive(Debug, Default)]
pub struct ImageIndex {
    entries: HashMap<String, ImageEntry>,
}

impl ImageIndex {
    /// 空索引（无图片目录的导入路径使用）
    pub fn empty() -> Self {
        ImageIndex {
            entries: HashMap::new(),
        }
    }

    /// 扫描目录建立索引
    ///
    /// - 目录不存在或不可读: 记录告警, 返回空索引（导入继续, 商品无图）
    /// - 非图片扩展名与子目录一律跳过
    /// - 按文件名排序遍历, 重名键（同名不同扩展名）后者覆盖前者, 结果确定
    pub fn scan(dir: &Path) -> Self {
        let read_dir = match fs::read_dir(dir) {
            Ok(rd) => rd,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "图片目录不可读, 使用空索引");
                return ImageIndex::empty();
            }
        };

        let mut file_names: Vec<String> = read_dir
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(|s| s.to_string()))
            .collect();
        file_names.sort();

        let mut entries = HashMap::new();
        for file_name in file_names {
            let path = Path::new(&file_name);
            let ext = match path.extension().and_then(|e| e.to_str()) {
                Some(e) => e.to_ascii_lowercase(),
                None => continue,
            };
            if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(s) => s.to_uppercase(),
                None => continue,
            };
            entries.insert(
                stem,
                ImageEntry {
                    file_name: file_name.clone(),
                    source_path: dir.join(&file_name),
                },
            );
        }

        debug!(dir = %dir.display(), count = entries.len(), "图片索引建立完成");
        ImageIndex { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 解析 SKU 对应的图片
    ///
    /// 1. 精确命中: 索引键等于大写 SKU
    /// 2. 前缀命中: SKU 等于键, 或 SKU 以 `键-` 开头（款式图覆盖全部尺码）
    ///
    /// 前缀命中多个键时取最长键; 同一 SKU 的定长前缀唯一,
    /// 等长的不同键不可能同时命中, 因此结果确定。
    pub fn resolve(&self, sku: &str) -> Option<&ImageEntry> {
        let upper = sku.to_uppercase();
        if let Some(entry) = self.entries.get(&upper) {
            return Some(entry);
        }
        self.entries
            .iter()
            .filter(|(key, _)| upper == **key || upper.starts_with(&format!("{}-", key)))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, entry)| entry)
    }

    /// 解析并返回 web 路径（不做文件复制, 种子生成路径使用）
    pub fn resolve_web_path(&self, sku: &str) -> Option<String> {
        self.resolve(sku).map(|entry| entry.web_path())
    }

    /// 解析并把图片复制进看板静态资源目录（导入路径使用）
    ///
    /// 复制失败只告警不中断, 该商品按无图处理。
    pub fn resolve_and_copy(&self, sku: &str, public_dir: &Path) -> Option<String> {
        let entry = self.resolve(sku)?;
        if let Err(e) = fs::create_dir_all(public_dir) {
            warn!(dir = %public_dir.display(), error = %e, "静态资源目录创建失败");
            return None;
        }
        let target = public_dir.join(&entry.file_name);
        match fs::copy(&entry.source_path, &target) {
            Ok(_) => Some(entry.web_path()),
            Err(e) => {
                warn!(
                    sku = %sku,
                    source = %entry.source_path.display(),
                    error = %e,
                    "图片复制失败, 该商品按无图处理"
                );
                None
            }
        }
    }
}
