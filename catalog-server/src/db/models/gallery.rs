//! Product Gallery Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Gallery row owned by a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gallery {
    pub id: RecordId,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub product: Option<RecordId>,
}
