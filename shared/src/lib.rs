//! Shared types for the Vitryna catalog framework
//!
//! View models and response envelopes exchanged between the catalog server
//! and its storefront clients. Record ids are carried as plain
//! `"table:key"` strings so clients stay database-agnostic.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    AttributeValueView, AttributeView, BreadcrumbView, CategoryView, FilterValueView, FilterView,
    GalleryView, OptionView, ProductView, TagView,
};
pub use response::{CatalogData, CatalogResponse};
