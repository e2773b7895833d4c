//! Image Sanitizer Service
//!
//! 清理历史遗留的内联 base64 图片字段
//!
//! Early catalog imports stored images inline as `data:image/...;base64,`
//! payloads. The sweep clears exactly those fields and nothing else;
//! running it against an already-clean store touches zero rows.

use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::RepoResult;

const DATA_IMAGE_PREFIX: &str = "data:image";

/// Per-table counts of cleared fields
#[derive(Debug, Clone, Copy, Default)]
pub struct SanitizeReport {
    pub category_fields: usize,
    pub product_fields: usize,
    pub gallery_fields: usize,
}

impl SanitizeReport {
    pub fn total(&self) -> usize {
        self.category_fields + self.product_fields + self.gallery_fields
    }
}

/// Base64 image field sweep
#[derive(Clone)]
pub struct ImageSanitizer {
    db: Surreal<Db>,
}

impl ImageSanitizer {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    /// Clear every `data:image`-prefixed image field
    ///
    /// Sweeps category.opengraph_image, category.image,
    /// product.opengraph_image and product_gallery.image. Matching nothing
    /// is success, and a second run is a no-op.
    pub async fn sanitize(&self) -> RepoResult<SanitizeReport> {
        let report = SanitizeReport {
            category_fields: self.clear_field("category", "opengraph_image").await?
                + self.clear_field("category", "image").await?,
            product_fields: self.clear_field("product", "opengraph_image").await?,
            gallery_fields: self.clear_field("product_gallery", "image").await?,
        };

        tracing::info!(
            categories = report.category_fields,
            products = report.product_fields,
            galleries = report.gallery_fields,
            "Base64 image sweep finished"
        );

        Ok(report)
    }

    async fn clear_field(&self, table: &str, field: &str) -> RepoResult<usize> {
        let query = format!(
            "UPDATE {table} SET {field} = NONE \
             WHERE {field} != NONE AND string::starts_with({field}, $prefix)"
        );
        let updated: Vec<Value> = self
            .db
            .query(query)
            .bind(("prefix", DATA_IMAGE_PREFIX))
            .await?
            .take(0)?;
        Ok(updated.len())
    }
}
