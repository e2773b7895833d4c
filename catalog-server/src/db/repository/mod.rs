//! Repository Module
//!
//! Read-side data access for the catalog tables. The document store can
//! hydrate record links (`FETCH`) but cannot filter the fetched rows, so
//! every repository method applies the soft-delete predicate uniformly as a
//! post-fetch pruning step at each join level.

pub mod attribute_value;
pub mod category;
pub mod filter;
pub mod filter_value;
pub mod product_option;
pub mod tag;

// Re-exports
pub use attribute_value::AttributeValueRepository;
pub use category::CategoryRepository;
pub use filter::FilterRepository;
pub use filter_value::FilterValueRepository;
pub use product_option::OptionRepository;
pub use tag::TagRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
