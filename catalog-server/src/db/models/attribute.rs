//! Product Attribute Models

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::product::ProductWithOptions;

/// Named attribute dimension (e.g. "Color")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub id: RecordId,
    pub name: String,
}

/// Concrete attribute value carried by a product
///
/// `name_ua` is the lookup key facet values resolve against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: RecordId,
    pub name_ua: String,
    pub product: RecordId,
}

/// Attribute value with its owning product (and options) hydrated
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeValueWithProduct {
    pub id: RecordId,
    pub name_ua: String,
    /// NONE when the owning product link does not resolve
    #[serde(default)]
    pub product: Option<ProductWithOptions>,
}
