//! Product Attribute Value Repository

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoResult};
use crate::db::models::AttributeValueWithProduct;

#[derive(Clone)]
pub struct AttributeValueRepository {
    base: BaseRepository,
}

impl AttributeValueRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Attribute values matching the given names, products hydrated
    ///
    /// Rows whose owning product is missing or soft-deleted are dropped;
    /// soft-deleted options are pruned from the surviving products.
    pub async fn find_by_names(
        &self,
        names: &[String],
    ) -> RepoResult<Vec<AttributeValueWithProduct>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<AttributeValueWithProduct> = self
            .base
            .db()
            .query(
                "SELECT * FROM product_attribute_value WHERE name_ua IN $names \
                 FETCH product, product.options",
            )
            .bind(("names", names.to_vec()))
            .await?
            .take(0)?;

        Ok(rows
            .into_iter()
            .filter(|row| row.product.as_ref().is_some_and(|p| !p.is_deleted))
            .map(|mut row| {
                if let Some(product) = row.product.as_mut() {
                    product.options.retain(|option| !option.is_deleted);
                }
                row
            })
            .collect())
    }
}
