//! Catalog Resolution Pipeline
//!
//! Turns an encoded slug+selector path into the full storefront payload:
//! options, applicable filters, breadcrumbs, tags and viewed-with options.
//!
//! # 候选来源
//!
//! 选中的 option 集合从四个来源合并 (按标识去重)：
//!
//! 1. 分类的直属商品 options (fallback scope)
//! 2. 子分类商品 options (fallback scope)
//! 3. 属性匹配命中的商品 options
//! 4. facet 值直接指定的 options
//!
//! Facet selection is a union (OR) across every matched source, never an
//! intersection: any non-empty match from attributes or explicit options
//! replaces the category scope wholesale instead of narrowing it. Only a
//! selector that matches nothing falls back to the full category scope.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    Category, CategoryFull, FilterSelector, FilterValue, FilterWithValues, OptionFull,
    OptionWithProduct, Tag,
};
use crate::db::repository::{
    AttributeValueRepository, CategoryRepository, FilterRepository, FilterValueRepository,
    OptionRepository, RepoResult,
};
use crate::services::ancestry::{AncestryBuilder, DbAncestryBuilder};
use crate::services::ordering::{NameThenIdOrderer, OptionOrderer};
use crate::services::selector;
use crate::services::tags::{DbTagResolver, TagResolver};
use crate::utils::{AppError, AppResult};

/// Fully resolved catalog payload (db-level types; the API layer converts
/// to view models)
#[derive(Debug)]
pub struct ResolvedCatalog {
    pub category: CategoryFull,
    pub options: Vec<OptionFull>,
    pub filters: Vec<FilterWithValues>,
    pub tags: Vec<Tag>,
    pub breadcrumbs: Vec<Category>,
    pub options_viewed_with: Vec<OptionWithProduct>,
}

/// Resolution service
#[derive(Clone)]
pub struct CatalogResolver {
    db: Surreal<Db>,
    orderer: Arc<dyn OptionOrderer>,
    ancestry: Arc<dyn AncestryBuilder>,
    tags: Arc<dyn TagResolver>,
}

impl CatalogResolver {
    pub fn new(
        db: Surreal<Db>,
        orderer: Arc<dyn OptionOrderer>,
        ancestry: Arc<dyn AncestryBuilder>,
        tags: Arc<dyn TagResolver>,
    ) -> Self {
        Self {
            db,
            orderer,
            ancestry,
            tags,
        }
    }

    /// Construct with the default collaborators (db-backed breadcrumbs and
    /// tags, name-then-id ordering)
    pub fn with_defaults(db: Surreal<Db>) -> Self {
        Self::new(
            db.clone(),
            Arc::new(NameThenIdOrderer),
            Arc::new(DbAncestryBuilder::new(db.clone())),
            Arc::new(DbTagResolver::new(db)),
        )
    }

    /// Resolve an encoded slug+selector path
    pub async fn resolve(&self, raw: &str) -> AppResult<ResolvedCatalog> {
        let parsed = selector::parse(raw);
        tracing::debug!(
            url = %parsed.url,
            tokens = parsed.url_values.len(),
            "Resolving catalog path"
        );

        let category_repo = CategoryRepository::new(self.db.clone());
        let value_repo = FilterValueRepository::new(self.db.clone());

        // Category load and facet classification are independent
        let (category, facet_values) = tokio::join!(
            category_repo.find_by_url_full(&parsed.url),
            value_repo.find_by_urls(&parsed.url_values),
        );
        let category = category?
            .ok_or_else(|| AppError::not_found(format!("Category '{}' not found", parsed.url)))?;
        let facet_values = facet_values?;

        let (attribute_names, explicit_ids) = classify(&facet_values);

        let option_repo = OptionRepository::new(self.db.clone());
        let attribute_options = self.match_attribute_options(&attribute_names).await?;
        let explicit_existing = option_repo.find_existing_ids(&explicit_ids).await?;

        // Union across all matched sources; a non-empty match replaces the
        // category scope instead of narrowing it
        let selected = dedup_ids(attribute_options.into_iter().chain(explicit_existing));
        let final_ids = if selected.is_empty() {
            scope_ids(&category)
        } else {
            selected
        };

        let filter_repo = FilterRepository::new(self.db.clone());
        let (options, filters, options_viewed_with, breadcrumbs, tags) = tokio::join!(
            option_repo.find_full_by_ids(&final_ids),
            filter_repo.find_active_for_category(&category.id),
            self.assemble_viewed_with(&category),
            self.ancestry.parent_tree(&category.id),
            self.tags.tags_for_category(&category),
        );

        let options = options?;
        tracing::info!(
            url = %parsed.url,
            options = options.len(),
            "Catalog path resolved"
        );

        Ok(ResolvedCatalog {
            category,
            options,
            filters: filters?,
            tags: tags?,
            breadcrumbs: breadcrumbs?,
            options_viewed_with: options_viewed_with?,
        })
    }

    /// Options reachable through products carrying a matching attribute value
    async fn match_attribute_options(&self, names: &[String]) -> RepoResult<Vec<RecordId>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let repo = AttributeValueRepository::new(self.db.clone());
        let rows = repo.find_by_names(names).await?;

        let mut ids = Vec::new();
        for row in rows {
            if let Some(product) = row.product {
                ids.extend(product.options.into_iter().map(|option| option.id));
            }
        }
        Ok(ids)
    }

    /// Flatten, hydrate and order the options of every viewed-with category
    ///
    /// The flattened sequence keeps source multiplicity: an option
    /// referenced by several viewed-with products appears once per
    /// reference. The assembler never collapses repeats.
    async fn assemble_viewed_with(
        &self,
        category: &CategoryFull,
    ) -> RepoResult<Vec<OptionWithProduct>> {
        let mut flattened: Vec<RecordId> = Vec::new();
        for viewed in &category.viewed_with {
            for product in viewed.products.iter().chain(viewed.child_products.iter()) {
                flattened.extend(product.options.iter().map(|option| option.id.clone()));
            }
        }
        if flattened.is_empty() {
            return Ok(Vec::new());
        }

        let unique = dedup_ids(flattened.iter().cloned());
        let repo = OptionRepository::new(self.db.clone());
        let rows = repo.find_viewed_with_by_ids(&unique).await?;

        let by_id: HashMap<String, OptionWithProduct> = rows
            .into_iter()
            .map(|row| (row.id.to_string(), row))
            .collect();
        let assembled: Vec<OptionWithProduct> = flattened
            .iter()
            .filter_map(|id| by_id.get(&id.to_string()).cloned())
            .collect();

        Ok(self.orderer.sort_by_type(assembled))
    }
}

/// Split loaded facet values into attribute-name keys and explicit option
/// ids; inert values contribute nothing
fn classify(values: &[FilterValue]) -> (Vec<String>, Vec<RecordId>) {
    let mut names = Vec::new();
    let mut seen_names = HashSet::new();
    let mut option_ids = Vec::new();

    for value in values {
        match value.selector() {
            Some(FilterSelector::Attribute(name)) => {
                if seen_names.insert(name.clone()) {
                    names.push(name);
                }
            }
            Some(FilterSelector::Option(id)) => option_ids.push(id),
            None => {}
        }
    }

    (names, option_ids)
}

/// Every option id reachable from the category's direct and child products
fn scope_ids(category: &CategoryFull) -> Vec<RecordId> {
    dedup_ids(
        category
            .products
            .iter()
            .chain(category.child_products.iter())
            .flat_map(|product| product.options.iter().map(|option| option.id.clone())),
    )
}

/// Deduplicate by record identity, keeping first-occurrence order
fn dedup_ids<I>(ids: I) -> Vec<RecordId>
where
    I: IntoIterator<Item = RecordId>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(id.to_string()))
        .collect()
}
