//! Tag view model

use serde::{Deserialize, Serialize};

/// Tag surfaced alongside a resolved category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagView {
    pub id: String,
    pub name: String,
    pub url: String,
}
