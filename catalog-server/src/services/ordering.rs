//! Option Ordering
//!
//! The ordering applied to viewed-with options belongs to the integrating
//! storefront, not to the resolution core. The core only requires a total,
//! deterministic, stable ordering function and takes it through
//! [`OptionOrderer`].

use crate::db::models::OptionWithProduct;

/// Ordering seam for viewed-with options
pub trait OptionOrderer: Send + Sync {
    /// Order options by type. Must be a total, deterministic function of
    /// its input: equal inputs produce equal outputs, and ties keep their
    /// incoming relative order.
    fn sort_by_type(&self, options: Vec<OptionWithProduct>) -> Vec<OptionWithProduct>;
}

/// Default ordering: owning product name, then option name, then option id
///
/// Stand-in for the storefront's own rule; replace via
/// [`ServerState`](crate::core::ServerState) wiring.
#[derive(Debug, Clone, Default)]
pub struct NameThenIdOrderer;

impl OptionOrderer for NameThenIdOrderer {
    fn sort_by_type(&self, mut options: Vec<OptionWithProduct>) -> Vec<OptionWithProduct> {
        options.sort_by(|a, b| {
            let a_product = a.product.as_ref().map(|p| p.name.as_str()).unwrap_or("");
            let b_product = b.product.as_ref().map(|p| p.name.as_str()).unwrap_or("");
            a_product
                .cmp(b_product)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
        options
    }
}

#[cfg(test)]
mod tests {
    use surrealdb::RecordId;

    use super::*;

    fn option(key: &str, name: &str) -> OptionWithProduct {
        OptionWithProduct {
            id: RecordId::from_table_key("product_option", key),
            name: name.to_string(),
            is_deleted: false,
            product: None,
        }
    }

    #[test]
    fn ordering_is_deterministic() {
        let input = vec![option("b", "Large"), option("a", "Small"), option("c", "Large")];
        let first = NameThenIdOrderer.sort_by_type(input.clone());
        let second = NameThenIdOrderer.sort_by_type(input);
        let first_ids: Vec<_> = first.iter().map(|o| o.id.to_string()).collect();
        let second_ids: Vec<_> = second.iter().map(|o| o.id.to_string()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn ties_break_on_option_id() {
        let sorted = NameThenIdOrderer.sort_by_type(vec![option("z", "Same"), option("a", "Same")]);
        let ids: Vec<_> = sorted.iter().map(|o| o.id.key().to_string()).collect();
        assert_eq!(ids, vec!["a", "z"]);
    }
}
