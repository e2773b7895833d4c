//! Breadcrumb Ancestry
//!
//! External collaborator seam: given a resolved category, produce its
//! parent chain root-first, ending at the category itself.

use std::collections::HashSet;

use async_trait::async_trait;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::Category;
use crate::db::repository::{CategoryRepository, RepoResult};

/// Breadcrumb builder seam
#[async_trait]
pub trait AncestryBuilder: Send + Sync {
    /// Ordered parent chain, root first, ending at the queried category.
    /// Unknown ids yield an empty chain.
    async fn parent_tree(&self, category_id: &RecordId) -> RepoResult<Vec<Category>>;
}

/// Default implementation walking `parent` links through the store
#[derive(Clone)]
pub struct DbAncestryBuilder {
    repo: CategoryRepository,
}

impl DbAncestryBuilder {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: CategoryRepository::new(db),
        }
    }
}

#[async_trait]
impl AncestryBuilder for DbAncestryBuilder {
    async fn parent_tree(&self, category_id: &RecordId) -> RepoResult<Vec<Category>> {
        let mut chain = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut cursor = Some(category_id.clone());

        while let Some(id) = cursor {
            // cycle guard: corrupted parent links must not hang a request
            if !visited.insert(id.to_string()) {
                tracing::warn!(category = %id, "Parent chain cycle detected, truncating breadcrumbs");
                break;
            }
            let Some(category) = self.repo.find_by_id(&id).await? else {
                break;
            };
            cursor = category.parent.clone();
            chain.push(category);
        }

        chain.reverse();
        Ok(chain)
    }
}
