//! Tag Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::Tag;

#[derive(Clone)]
pub struct TagRepository {
    base: BaseRepository,
}

impl TagRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Live tags attached to a category
    pub async fn find_by_category(&self, category: &RecordId) -> RepoResult<Vec<Tag>> {
        let tags: Vec<Tag> = self
            .base
            .db()
            .query("SELECT * FROM tag WHERE is_deleted != true AND categories CONTAINS $category")
            .bind(("category", category.clone()))
            .await?
            .take(0)?;
        Ok(tags)
    }
}
