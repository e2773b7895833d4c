//! Filter Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::FilterWithValues;

#[derive(Clone)]
pub struct FilterRepository {
    base: BaseRepository,
}

impl FilterRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Active filters attached to a category, values hydrated
    ///
    /// Inactive values are pruned from the hydrated rows; filters left with
    /// no active values are still returned so the storefront can decide how
    /// to render them.
    pub async fn find_active_for_category(
        &self,
        category: &RecordId,
    ) -> RepoResult<Vec<FilterWithValues>> {
        let filters: Vec<FilterWithValues> = self
            .base
            .db()
            .query(
                "SELECT * FROM filter WHERE is_active = true AND categories CONTAINS $category \
                 FETCH values",
            )
            .bind(("category", category.clone()))
            .await?
            .take(0)?;

        Ok(filters
            .into_iter()
            .map(|mut filter| {
                filter.values.retain(|value| value.is_active);
                filter
            })
            .collect())
    }
}
