use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use catalogue_core::{CatalogueError, CatalogueResult, Entity, ProductId};

/// Entity: Product (one stocked item).
///
/// A product is a standalone value: it never refers back to the catalogue
/// holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    quantity_in_stock: u32,
    reorder_level: u32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    reorder_amount: Option<u32>,
}

/// Wire shape of a product; validated into [`Product`] on deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: ProductId,
    name: String,
    quantity_in_stock: u32,
    reorder_level: u32,
    #[serde(with = "rust_decimal::serde::float")]
    price: Decimal,
    #[serde(default)]
    reorder_amount: Option<u32>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = CatalogueError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let product = Product::new(
            record.id,
            record.name,
            record.quantity_in_stock,
            record.reorder_level,
            record.price,
        )?;
        Ok(match record.reorder_amount {
            Some(amount) => product.with_reorder_amount(amount),
            None => product,
        })
    }
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity_in_stock: u32,
        reorder_level: u32,
        price: Decimal,
    ) -> CatalogueResult<Self> {
        if price < Decimal::ZERO {
            return Err(CatalogueError::validation(format!(
                "price cannot be negative (product {id}, price {price})"
            )));
        }
        Ok(Self {
            id,
            name: name.into(),
            quantity_in_stock,
            reorder_level,
            price,
            reorder_amount: None,
        })
    }

    pub fn with_reorder_amount(mut self, reorder_amount: u32) -> Self {
        self.reorder_amount = Some(reorder_amount);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn reorder_level(&self) -> u32 {
        self.reorder_level
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn reorder_amount(&self) -> Option<u32> {
        self.reorder_amount
    }

    /// Stock at or below the reorder level (boundary inclusive).
    pub fn needs_reorder(&self) -> bool {
        self.quantity_in_stock <= self.reorder_level
    }

    pub fn is_in_stock(&self) -> bool {
        self.quantity_in_stock > 0
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
