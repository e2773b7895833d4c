//! Category view model

use serde::{Deserialize, Serialize};

/// Category as exposed to storefront clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub id: String,
    pub name: String,
    /// Slug used in catalog URLs
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opengraph_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One breadcrumb entry, root first
pub type BreadcrumbView = CategoryView;
