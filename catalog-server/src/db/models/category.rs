//! Category Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::product::ProductWithOptions;
use super::serde_helpers;

pub type CategoryId = RecordId;

/// Category row as stored
///
/// `products` holds the category's own products, `child_products` the
/// products collected from descendant categories. `viewed_with` links the
/// sibling categories surfaced as browsing suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Slug used in catalog URLs
    pub url: String,
    #[serde(default)]
    pub parent: Option<RecordId>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub products: Vec<RecordId>,
    #[serde(default)]
    pub child_products: Vec<RecordId>,
    #[serde(default)]
    pub viewed_with: Vec<RecordId>,
    #[serde(default)]
    pub opengraph_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Category with products, child products and viewed-with categories
/// hydrated down to option level
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryFull {
    pub id: CategoryId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub parent: Option<RecordId>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub products: Vec<ProductWithOptions>,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub child_products: Vec<ProductWithOptions>,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub viewed_with: Vec<ViewedWithCategory>,
    #[serde(default)]
    pub opengraph_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// Viewed-with category as hydrated inside [`CategoryFull`]
#[derive(Debug, Clone, Deserialize)]
pub struct ViewedWithCategory {
    pub id: CategoryId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub products: Vec<ProductWithOptions>,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub child_products: Vec<ProductWithOptions>,
}
