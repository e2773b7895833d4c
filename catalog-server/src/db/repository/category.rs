//! Category Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{Category, CategoryFull, ProductWithOptions};

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a live category by slug, hydrated down to option level
    ///
    /// Fetches direct products, child-category products and every
    /// viewed-with category with its own products, then prunes soft-deleted
    /// rows at each level. Returns `None` when no live category matches.
    pub async fn find_by_url_full(&self, url: &str) -> RepoResult<Option<CategoryFull>> {
        let url_owned = url.to_string();
        // marker absence counts as live, so the predicate is `!= true`
        let categories: Vec<CategoryFull> = self
            .base
            .db()
            .query(
                "SELECT * FROM category WHERE url = $url AND is_deleted != true \
                 FETCH products, products.options, \
                       child_products, child_products.options, \
                       viewed_with, \
                       viewed_with.products, viewed_with.products.options, \
                       viewed_with.child_products, viewed_with.child_products.options",
            )
            .bind(("url", url_owned))
            .await?
            .take(0)?;

        Ok(categories.into_iter().next().map(prune))
    }

    /// Find a live category row by id (no hydration)
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Category>> {
        let categories: Vec<Category> = self
            .base
            .db()
            .query("SELECT * FROM category WHERE id = $id AND is_deleted != true")
            .bind(("id", id.clone()))
            .await?
            .take(0)?;
        Ok(categories.into_iter().next())
    }
}

/// Drop soft-deleted rows at every hydration level
fn prune(mut category: CategoryFull) -> CategoryFull {
    category.products = prune_products(category.products);
    category.child_products = prune_products(category.child_products);
    category.viewed_with = category
        .viewed_with
        .into_iter()
        .filter(|viewed| !viewed.is_deleted)
        .map(|mut viewed| {
            viewed.products = prune_products(viewed.products);
            viewed.child_products = prune_products(viewed.child_products);
            viewed
        })
        .collect();
    category
}

fn prune_products(products: Vec<ProductWithOptions>) -> Vec<ProductWithOptions> {
    products
        .into_iter()
        .filter(|product| !product.is_deleted)
        .map(|mut product| {
            product.options.retain(|option| !option.is_deleted);
            product
        })
        .collect()
}
