//! Product option view models
//!
//! An option is one purchasable variant of a product. The resolution
//! endpoint returns options hydrated with their owning product.

use serde::{Deserialize, Serialize};

use super::category::CategoryView;

/// Purchasable product variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionView {
    pub id: String,
    pub name: String,
    /// Owning product. Always present in resolution results; options whose
    /// product is gone are dropped before assembly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductView>,
}

/// Product as embedded in an option payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opengraph_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_values: Vec<AttributeValueView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_category: Option<CategoryView>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<CategoryView>,
}

/// Named product attribute (e.g. "Color")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeView {
    pub id: String,
    pub name: String,
}

/// Concrete attribute value carried by a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValueView {
    pub id: String,
    pub name_ua: String,
}

/// Product image gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryView {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
