//! Filter (facet) view models

use serde::{Deserialize, Serialize};

/// Facet applicable to a category, with its selectable values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterView {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub values: Vec<FilterValueView>,
}

/// One selectable facet value
///
/// Exactly one of `attribute_value` / `option_value` is set; the legacy
/// two-field wire shape is preserved for storefront compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterValueView {
    pub id: String,
    pub name: String,
    /// Token this value contributes to the selector path
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_value: Option<String>,
}
