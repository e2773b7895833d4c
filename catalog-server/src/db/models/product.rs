//! Product Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::attribute::{Attribute, AttributeValue};
use super::category::Category;
use super::gallery::Gallery;
use super::product_option::ProductOption;
use super::serde_helpers;

pub type ProductId = RecordId;

/// Product row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    /// Record links to product_option
    #[serde(default)]
    pub options: Vec<RecordId>,
    /// Record links to product_attribute_value
    #[serde(default)]
    pub attribute_values: Vec<RecordId>,
    /// Record links to product_attribute
    #[serde(default)]
    pub attributes: Vec<RecordId>,
    #[serde(default)]
    pub gallery: Option<RecordId>,
    #[serde(default)]
    pub main_category: Option<RecordId>,
    #[serde(default)]
    pub categories: Vec<RecordId>,
    #[serde(default)]
    pub opengraph_image: Option<String>,
}

/// Product with its options hydrated (category / viewed-with queries)
#[derive(Debug, Clone, Deserialize)]
pub struct ProductWithOptions {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub options: Vec<ProductOption>,
}

/// Product with options and gallery hydrated (viewed-with assembly)
#[derive(Debug, Clone, Deserialize)]
pub struct ProductWithOptionsAndGallery {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub gallery: Option<Gallery>,
}

/// Product with every display relation hydrated (final option query)
#[derive(Debug, Clone, Deserialize)]
pub struct ProductFull {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub attributes: Vec<Attribute>,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub attribute_values: Vec<AttributeValue>,
    #[serde(default)]
    pub gallery: Option<Gallery>,
    #[serde(default)]
    pub main_category: Option<Category>,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub opengraph_image: Option<String>,
}
