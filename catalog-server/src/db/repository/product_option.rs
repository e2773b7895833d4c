//! Product Option Repository

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::{OptionFull, OptionWithProduct};

#[derive(Clone)]
pub struct OptionRepository {
    base: BaseRepository,
}

impl OptionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Which of the given option ids exist as live rows
    pub async fn find_existing_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<RecordId>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: Vec<RecordId> = self
            .base
            .db()
            .query("SELECT VALUE id FROM product_option WHERE id IN $ids AND is_deleted != true")
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;
        Ok(found)
    }

    /// Final resolution query: live options in the id set, hydrated with the
    /// owning product and all of its display relations
    ///
    /// Options whose product is missing or soft-deleted are dropped
    /// entirely; soft-deleted galleries and categories are pruned from the
    /// hydrated product.
    pub async fn find_full_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<OptionFull>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let options: Vec<OptionFull> = self
            .base
            .db()
            .query(
                "SELECT * FROM product_option WHERE id IN $ids AND is_deleted != true \
                 FETCH product, product.attributes, product.attribute_values, \
                       product.gallery, product.main_category, product.categories",
            )
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;

        Ok(options
            .into_iter()
            .filter(|option| option.product.as_ref().is_some_and(|p| !p.is_deleted))
            .map(|mut option| {
                if let Some(product) = option.product.as_mut() {
                    if product.gallery.as_ref().is_some_and(|g| g.is_deleted) {
                        product.gallery = None;
                    }
                    if product.main_category.as_ref().is_some_and(|c| c.is_deleted) {
                        product.main_category = None;
                    }
                    product.categories.retain(|category| !category.is_deleted);
                }
                option
            })
            .collect())
    }

    /// Viewed-with hydration: live options in the id set with product,
    /// product options and gallery fetched
    pub async fn find_viewed_with_by_ids(
        &self,
        ids: &[RecordId],
    ) -> RepoResult<Vec<OptionWithProduct>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let options: Vec<OptionWithProduct> = self
            .base
            .db()
            .query(
                "SELECT * FROM product_option WHERE id IN $ids AND is_deleted != true \
                 FETCH product, product.options, product.gallery",
            )
            .bind(("ids", ids.to_vec()))
            .await?
            .take(0)?;

        Ok(options
            .into_iter()
            .filter(|option| option.product.as_ref().is_some_and(|p| !p.is_deleted))
            .map(|mut option| {
                if let Some(product) = option.product.as_mut() {
                    product.options.retain(|o| !o.is_deleted);
                    if product.gallery.as_ref().is_some_and(|g| g.is_deleted) {
                        product.gallery = None;
                    }
                }
                option
            })
            .collect())
    }
}
