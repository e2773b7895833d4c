//! View models for the catalog API

pub mod category;
pub mod filter;
pub mod option;
pub mod tag;

pub use category::{BreadcrumbView, CategoryView};
pub use filter::{FilterValueView, FilterView};
pub use option::{AttributeValueView, AttributeView, GalleryView, OptionView, ProductView};
pub use tag::TagView;
