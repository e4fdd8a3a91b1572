use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalogue_core::{CatalogueError, CatalogueResult, ProductId, ValueObject};

use crate::product::Product;

/// Search criteria as submitted by a caller: exactly one of `price` or
/// `keyword` must be set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl ValueObject for SearchCriteria {}

impl SearchCriteria {
    pub fn by_price(max_price: Decimal) -> Self {
        Self {
            price: Some(max_price),
            keyword: None,
        }
    }

    pub fn by_keyword(keyword: impl Into<String>) -> Self {
        Self {
            price: None,
            keyword: Some(keyword.into()),
        }
    }

    /// Resolve the criteria into the single filter they select.
    ///
    /// Criteria naming both filters are rejected rather than given a precedence.
    pub fn into_filter(self) -> CatalogueResult<SearchFilter> {
        match (self.price, self.keyword) {
            (Some(price), None) => Ok(SearchFilter::MaxPrice(price)),
            (None, Some(keyword)) => Ok(SearchFilter::Keyword(keyword)),
            (Some(_), Some(_)) => Err(CatalogueError::bad_search(
                "criteria must specify either price or keyword, not both",
            )),
            (None, None) => Err(CatalogueError::bad_search(
                "criteria must specify price or keyword",
            )),
        }
    }
}

/// A resolved search filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Price less than or equal to the bound.
    MaxPrice(Decimal),
    /// Name contains the keyword (case-sensitive).
    Keyword(String),
}

impl ValueObject for SearchFilter {}

impl SearchFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SearchFilter::MaxPrice(max) => product.price() <= *max,
            SearchFilter::Keyword(keyword) => product.name().contains(keyword.as_str()),
        }
    }
}

/// Result of a search: ids of the matching products.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub searched_products: Vec<ProductId>,
}

impl ValueObject for SearchResult {}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.searched_products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.searched_products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.searched_products.iter().any(|p| p.as_str() == id)
    }
}

impl FromIterator<ProductId> for SearchResult {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            searched_products: iter.into_iter().collect(),
        }
    }
}
