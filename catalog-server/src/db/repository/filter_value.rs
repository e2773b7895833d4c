//! Filter Value Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::FilterValue;

#[derive(Clone)]
pub struct FilterValueRepository {
    base: BaseRepository,
}

impl FilterValueRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Load the facet values whose url token appears in the selector
    pub async fn find_by_urls(&self, urls: &[String]) -> RepoResult<Vec<FilterValue>> {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        let values: Vec<FilterValue> = self
            .base
            .db()
            .query("SELECT * FROM filter_value WHERE url IN $urls")
            .bind(("urls", urls.to_vec()))
            .await?
            .take(0)?;
        Ok(values)
    }
}
