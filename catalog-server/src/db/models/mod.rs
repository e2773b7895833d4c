//! Catalog Data Models
//!
//! Row structs mirror the stored shape; the `*Full` / `*With*` variants
//! mirror the same rows as returned by hydrated (`FETCH`) queries. All
//! reference fields are SurrealDB record links.

pub mod attribute;
pub mod category;
pub mod filter;
pub mod gallery;
pub mod product;
pub mod product_option;
pub mod serde_helpers;
pub mod tag;

pub use attribute::{Attribute, AttributeValue, AttributeValueWithProduct};
pub use category::{Category, CategoryFull, ViewedWithCategory};
pub use filter::{Filter, FilterSelector, FilterValue, FilterWithValues};
pub use gallery::Gallery;
pub use product::{Product, ProductFull, ProductWithOptions, ProductWithOptionsAndGallery};
pub use product_option::{OptionFull, OptionWithProduct, ProductOption};
pub use tag::Tag;
