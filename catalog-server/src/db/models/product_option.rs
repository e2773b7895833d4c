//! Product Option Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::product::{ProductFull, ProductWithOptionsAndGallery};

pub type OptionId = RecordId;

/// Option row as stored — one purchasable variant of a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    /// Back-reference to the owning product
    pub product: RecordId,
}

/// Option hydrated with its fully loaded product (resolution results)
#[derive(Debug, Clone, Deserialize)]
pub struct OptionFull {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    /// NONE when the owning product link does not resolve; such options are
    /// pruned before leaving the repository layer
    #[serde(default)]
    pub product: Option<ProductFull>,
}

/// Option hydrated for viewed-with assembly
#[derive(Debug, Clone, Deserialize)]
pub struct OptionWithProduct {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub product: Option<ProductWithOptionsAndGallery>,
}
