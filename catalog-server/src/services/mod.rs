//! 服务层 - 目录解析核心服务
//!
//! # 服务列表
//!
//! - [`CatalogResolver`] - slug+selector 解析管道
//! - [`ImageSanitizer`] - base64 图片字段清理
//! - [`AncestryBuilder`] / [`TagResolver`] / [`OptionOrderer`] - 外部协作者接口

pub mod ancestry;
pub mod image_sanitizer;
pub mod ordering;
pub mod resolver;
pub mod selector;
pub mod tags;

pub use ancestry::{AncestryBuilder, DbAncestryBuilder};
pub use image_sanitizer::{ImageSanitizer, SanitizeReport};
pub use ordering::{NameThenIdOrderer, OptionOrderer};
pub use resolver::{CatalogResolver, ResolvedCatalog};
pub use selector::ParsedSelector;
pub use tags::{DbTagResolver, TagResolver};
