//! Catalog API response envelope

use serde::{Deserialize, Serialize};

use crate::models::{BreadcrumbView, CategoryView, FilterView, OptionView, TagView};

/// Top-level body of `GET /v1/{url}`
///
/// ```json
/// { "status": true, "data": { "category": ..., "options": [...] } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub status: bool,
    pub data: CatalogData,
}

impl CatalogResponse {
    pub fn new(data: CatalogData) -> Self {
        Self { status: true, data }
    }
}

/// Resolved catalog payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogData {
    pub category: CategoryView,
    pub options: Vec<OptionView>,
    pub filters: Vec<FilterView>,
    pub tags: Vec<TagView>,
    pub breadcrumbs: Vec<BreadcrumbView>,
    pub options_viewed_with: Vec<OptionView>,
}
