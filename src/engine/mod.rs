// ==========================================
// 仓库库存看板系统 - 规则引擎层
// ==========================================
// 职责: SKU 拆解、图片匹配、款式分组等纯业务规则
// 红线: Engine 不做 I/O 编排, 不拼 SQL; 图片模块仅限文件系统读取与复制
// ==========================================

pub mod image_resolver;
pub mod sku;
pub mod style_group;

// 重导出核心规则
pub use image_resolver::{ImageEntry, ImageIndex, IMAGE_EXTENSIONS, PUBLIC_IMAGE_PREFIX};
pub use sku::{decompose_sku, size_sort_key, SizeKey, SkuParts, ONE_SIZE, SIZE_ORDER};
pub use style_group::group_products;
