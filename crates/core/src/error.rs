//! Catalogue error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the catalogue domain.
pub type CatalogueResult<T> = Result<T, CatalogueError>;

/// Catalogue-level error.
///
/// Only structurally invalid requests are errors. A lookup for an unknown id is
/// not: lookups return `Option` and callers branch on absence separately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// A batch insert referenced ids already present in the catalogue.
    #[error("Bad Batch: product ids already in catalogue: {}", join_ids(.conflicting))]
    BadBatch { conflicting: Vec<ProductId> },

    /// Search criteria did not select exactly one filter.
    #[error("Bad Search: {0}")]
    BadSearch(String),

    /// A value failed validation (e.g. negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. blank).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogueError {
    pub fn bad_batch(conflicting: Vec<ProductId>) -> Self {
        Self::BadBatch { conflicting }
    }

    pub fn bad_search(msg: impl Into<String>) -> Self {
        Self::BadSearch(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

fn join_ids(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ProductId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_batch_message_lists_conflicting_ids() {
        let err = CatalogueError::bad_batch(vec![
            ProductId::new("A123").unwrap(),
            ProductId::new("A124").unwrap(),
        ]);
        assert_eq!(
            err.to_string(),
            "Bad Batch: product ids already in catalogue: A123, A124"
        );
    }

    #[test]
    fn bad_search_message_is_prefixed() {
        let err = CatalogueError::bad_search("no price or keyword given");
        assert!(err.to_string().starts_with("Bad Search"));
    }
}
