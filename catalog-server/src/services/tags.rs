//! Tag Resolution
//!
//! External collaborator seam producing the tags surfaced next to a
//! resolved category.

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{CategoryFull, Tag};
use crate::db::repository::{RepoResult, TagRepository};

/// Tag resolver seam
#[async_trait]
pub trait TagResolver: Send + Sync {
    async fn tags_for_category(&self, category: &CategoryFull) -> RepoResult<Vec<Tag>>;
}

/// Default implementation reading the tag table
#[derive(Clone)]
pub struct DbTagResolver {
    repo: TagRepository,
}

impl DbTagResolver {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: TagRepository::new(db),
        }
    }
}

#[async_trait]
impl TagResolver for DbTagResolver {
    async fn tags_for_category(&self, category: &CategoryFull) -> RepoResult<Vec<Tag>> {
        self.repo.find_by_category(&category.id).await
    }
}
