use serde::Serialize;

use catalogue_core::{ProductId, ValueObject};

/// Report: products whose stock has fallen to or below their reorder level.
///
/// Ids follow catalogue iteration order, but that order carries no meaning;
/// compare reports as sets.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderReport {
    pub product_ids: Vec<ProductId>,
}

impl ValueObject for ReorderReport {}

impl ReorderReport {
    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.product_ids.iter().any(|p| p.as_str() == id)
    }
}

impl FromIterator<ProductId> for ReorderReport {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            product_ids: iter.into_iter().collect(),
        }
    }
}
