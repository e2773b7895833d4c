//! Tag Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Tag row — surfaced alongside resolved categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub categories: Vec<RecordId>,
}
