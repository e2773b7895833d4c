//! Filter (Facet) Models

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Filter row as stored — a facet attached to one or more categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Filter {
    pub id: RecordId,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Record links to filter_value
    #[serde(default)]
    pub values: Vec<RecordId>,
    /// Categories this facet applies to
    #[serde(default)]
    pub categories: Vec<RecordId>,
}

/// Filter with its values hydrated
#[derive(Debug, Clone, Deserialize)]
pub struct FilterWithValues {
    pub id: RecordId,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "serde_helpers::fetched_vec")]
    pub values: Vec<FilterValue>,
    #[serde(default)]
    pub categories: Vec<RecordId>,
}

/// One selectable facet value
///
/// The stored shape keeps the legacy pair of optional payload fields; the
/// fields stay private and all consumers go through [`FilterValue::selector`],
/// which exposes the value as a tagged union. Construction enforces that
/// exactly one payload is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterValue {
    pub id: RecordId,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Token this value contributes to the selector path
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    option_value: Option<RecordId>,
}

/// What a facet value selects: a product-attribute name or a concrete option
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSelector {
    /// Matches products carrying an attribute value with this name
    Attribute(String),
    /// Matches one option directly
    Option(RecordId),
}

impl FilterValue {
    /// Facet value selecting by attribute name
    pub fn new_attribute(
        id: RecordId,
        name: impl Into<String>,
        url: impl Into<String>,
        attribute_value: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            url: url.into(),
            attribute_value: Some(attribute_value.into()),
            option_value: None,
        }
    }

    /// Facet value selecting one option directly
    pub fn new_option(
        id: RecordId,
        name: impl Into<String>,
        url: impl Into<String>,
        option_value: RecordId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            is_active: true,
            url: url.into(),
            attribute_value: None,
            option_value: Some(option_value),
        }
    }

    /// The value's selector, if it carries one
    ///
    /// Rows persisted with both legacy payloads resolve as attribute
    /// selectors; rows with neither are inert and return `None`.
    pub fn selector(&self) -> Option<FilterSelector> {
        if let Some(name) = &self.attribute_value {
            Some(FilterSelector::Attribute(name.clone()))
        } else {
            self.option_value
                .as_ref()
                .map(|id| FilterSelector::Option(id.clone()))
        }
    }

    pub fn attribute_value(&self) -> Option<&str> {
        self.attribute_value.as_deref()
    }

    pub fn option_value(&self) -> Option<&RecordId> {
        self.option_value.as_ref()
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(table: &str, key: &str) -> RecordId {
        RecordId::from_table_key(table, key)
    }

    #[test]
    fn attribute_value_yields_attribute_selector() {
        let value = FilterValue::new_attribute(rid("filter_value", "v1"), "Red", "red", "Color");
        assert_eq!(
            value.selector(),
            Some(FilterSelector::Attribute("Color".into()))
        );
    }

    #[test]
    fn option_value_yields_option_selector() {
        let target = rid("product_option", "o42");
        let value =
            FilterValue::new_option(rid("filter_value", "v2"), "42", "42", target.clone());
        assert_eq!(value.selector(), Some(FilterSelector::Option(target)));
    }

    #[test]
    fn missing_payloads_are_inert() {
        let value = FilterValue {
            id: rid("filter_value", "v3"),
            name: "ghost".into(),
            is_active: true,
            url: "ghost".into(),
            attribute_value: None,
            option_value: None,
        };
        assert_eq!(value.selector(), None);
    }

    #[test]
    fn both_payloads_resolve_as_attribute() {
        // Legacy rows may carry both fields; the attribute payload wins.
        let value = FilterValue {
            id: rid("filter_value", "v4"),
            name: "odd".into(),
            is_active: true,
            url: "odd".into(),
            attribute_value: Some("Size".into()),
            option_value: Some(rid("product_option", "o1")),
        };
        assert_eq!(
            value.selector(),
            Some(FilterSelector::Attribute("Size".into()))
        );
    }
}
