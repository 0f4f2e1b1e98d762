// ==========================================
// 仓库库存看板系统 - 数据源文件布局
// ==========================================
// 职责: 集中定义历史数据 / 用户数据各源文件的文件名与相对位置
// 规则: 文件名保留业务方交付时的原始命名, 不做改写
// ==========================================

use std::path::{Path, PathBuf};

use crate::domain::Warehouse;

/// 历史量表文件名
pub const LEGACY_QUANTITY_FILE: &str = "TW QTY LIST.csv";
/// 历史条目清单文件名
pub const LEGACY_ITEM_FILE: &str = "TW Item List.csv";
/// 历史种子输出文件名
pub const LEGACY_SEED_FILE: &str = "legacy_seed.json";
/// 用户数据种子输出文件名
pub const USER_SEED_FILE: &str = "products.json";
/// 铺底导入 CSV 输出文件名
pub const POPULATION_CSV_FILE: &str = "population_import.csv";

// ==========================================
// 历史数据源布局
// ==========================================

/// 历史数据（Teamwear 旧系统导出）的文件布局
///
/// 条码文件按优先级排列: 靠前的文件先写入, 同一 SKU 后续来源不再覆盖。
#[derive(Debug, Clone)]
pub struct LegacySourceLayout {
    /// 源文件所在目录
    pub root: PathBuf,
}

impl LegacySourceLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        LegacySourceLayout {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// 数量清单（SKU + Bin + Quantity）
    pub fn quantity_file(&self) -> PathBuf {
        self.root.join(LEGACY_QUANTITY_FILE)
    }

    /// 条目清单（SKU + 名称）
    pub fn item_file(&self) -> PathBuf {
        self.root.join(LEGACY_ITEM_FILE)
    }

    /// 条码文件（按优先级排序, 标签用于统计与日志）
    pub fn barcode_files(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            ("barcode2", self.root.join("barcode2.csv")),
            ("barcodes_tw", self.root.join("barcodes tw.csv")),
        ]
    }

    /// 种子输出路径
    pub fn seed_output(&self) -> PathBuf {
        self.root.join(LEGACY_SEED_FILE)
    }
}

// ==========================================
// 用户数据源布局
// ==========================================

/// 单个事业部的数据源布局
#[derive(Debug, Clone)]
pub struct DivisionSourceLayout {
    /// 日志与统计中使用的标签
    pub label: &'static str,
    /// 归属仓库
    pub warehouse: Warehouse,
    /// 条目清单文件
    pub items_file: PathBuf,
    /// 商品图片目录
    pub image_dir: PathBuf,
}

/// 用户数据（双仓库导出 + 图片目录）的文件布局
#[derive(Debug, Clone)]
pub struct UserSourceLayout {
    /// 源文件所在目录
    pub root: PathBuf,
    /// 静态资源目标目录（图片拷贝落点的上级, 含 public 前缀）
    pub public_dir: PathBuf,
}

impl UserSourceLayout {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(root: P, public_dir: Q) -> Self {
        UserSourceLayout {
            root: root.as_ref().to_path_buf(),
            public_dir: public_dir.as_ref().to_path_buf(),
        }
    }

    /// 两个事业部的布局
    ///
    /// 产出顺序固定 Teamwear 在前、Retail 在后; 下游按 SKU 键控消费时
    /// 后写入生效, 跨仓重复 SKU 以 Retail 数据为准。
    pub fn divisions(&self) -> Vec<DivisionSourceLayout> {
        vec![
            DivisionSourceLayout {
                label: "teamwear",
                warehouse: Warehouse::Teamwear,
                items_file: self.root.join("teamwear_items.csv"),
                image_dir: self.root.join("teamwear_images"),
            },
            DivisionSourceLayout {
                label: "retail",
                warehouse: Warehouse::Retail,
                items_file: self.root.join("retail_items.csv"),
                image_dir: self.root.join("retail_images"),
            },
        ]
    }

    /// 图片拷贝目标目录（web 路径 /product-images 对应的磁盘位置）
    pub fn image_output_dir(&self) -> PathBuf {
        self.public_dir.join("product-images")
    }

    /// 种子输出路径
    pub fn seed_output(&self) -> PathBuf {
        self.root.join(USER_SEED_FILE)
    }
}
