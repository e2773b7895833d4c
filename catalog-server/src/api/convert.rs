//! Db model → view model conversions
//!
//! The repository layer works on record links and hydrated rows; handlers
//! convert those into the `shared` view models right before serialization.

use shared::models::{
    AttributeValueView, AttributeView, CategoryView, FilterValueView, FilterView, GalleryView,
    OptionView, ProductView, TagView,
};
use shared::response::CatalogData;

use crate::db::models::{
    Attribute, AttributeValue, Category, CategoryFull, FilterValue, FilterWithValues, Gallery,
    OptionFull, OptionWithProduct, ProductFull, ProductWithOptionsAndGallery, Tag,
};
use crate::services::ResolvedCatalog;

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name,
            url: category.url,
            opengraph_image: category.opengraph_image,
            image: category.image,
        }
    }
}

impl From<&CategoryFull> for CategoryView {
    fn from(category: &CategoryFull) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            url: category.url.clone(),
            opengraph_image: category.opengraph_image.clone(),
            image: category.image.clone(),
        }
    }
}

impl From<Gallery> for GalleryView {
    fn from(gallery: Gallery) -> Self {
        Self {
            id: gallery.id.to_string(),
            image: gallery.image,
        }
    }
}

impl From<Attribute> for AttributeView {
    fn from(attribute: Attribute) -> Self {
        Self {
            id: attribute.id.to_string(),
            name: attribute.name,
        }
    }
}

impl From<AttributeValue> for AttributeValueView {
    fn from(value: AttributeValue) -> Self {
        Self {
            id: value.id.to_string(),
            name_ua: value.name_ua,
        }
    }
}

impl From<ProductFull> for ProductView {
    fn from(product: ProductFull) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            opengraph_image: product.opengraph_image,
            attributes: product.attributes.into_iter().map(Into::into).collect(),
            attribute_values: product
                .attribute_values
                .into_iter()
                .map(Into::into)
                .collect(),
            gallery: product.gallery.map(Into::into),
            main_category: product.main_category.map(Into::into),
            categories: product.categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ProductWithOptionsAndGallery> for ProductView {
    fn from(product: ProductWithOptionsAndGallery) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            opengraph_image: None,
            attributes: Vec::new(),
            attribute_values: Vec::new(),
            gallery: product.gallery.map(Into::into),
            main_category: None,
            categories: Vec::new(),
        }
    }
}

impl From<OptionFull> for OptionView {
    fn from(option: OptionFull) -> Self {
        Self {
            id: option.id.to_string(),
            name: option.name,
            product: option.product.map(Into::into),
        }
    }
}

impl From<OptionWithProduct> for OptionView {
    fn from(option: OptionWithProduct) -> Self {
        Self {
            id: option.id.to_string(),
            name: option.name,
            product: option.product.map(Into::into),
        }
    }
}

impl From<FilterValue> for FilterValueView {
    fn from(value: FilterValue) -> Self {
        let attribute_value = value.attribute_value().map(str::to_string);
        let option_value = value.option_value().map(|id| id.to_string());
        Self {
            id: value.id.to_string(),
            name: value.name,
            url: value.url,
            attribute_value,
            option_value,
        }
    }
}

impl From<FilterWithValues> for FilterView {
    fn from(filter: FilterWithValues) -> Self {
        Self {
            id: filter.id.to_string(),
            name: filter.name,
            values: filter.values.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Tag> for TagView {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name,
            url: tag.url,
        }
    }
}

impl From<ResolvedCatalog> for CatalogData {
    fn from(resolved: ResolvedCatalog) -> Self {
        Self {
            category: (&resolved.category).into(),
            options: resolved.options.into_iter().map(Into::into).collect(),
            filters: resolved.filters.into_iter().map(Into::into).collect(),
            tags: resolved.tags.into_iter().map(Into::into).collect(),
            breadcrumbs: resolved.breadcrumbs.into_iter().map(Into::into).collect(),
            options_viewed_with: resolved
                .options_viewed_with
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
