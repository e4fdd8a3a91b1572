use serde::{Deserialize, Serialize};

use catalogue_core::{Entity, ProductId, ValueObject};

use crate::product::Product;

/// Request: add several products to a catalogue in one all-or-nothing step.
///
/// On the wire this is `{ "type": "Batch", "products": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "BatchEnvelope", into = "BatchEnvelope")]
pub struct BatchRequest {
    pub products: Vec<Product>,
}

impl ValueObject for BatchRequest {}

impl BatchRequest {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Ids in submission order.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.products.iter().map(Entity::id)
    }
}

impl FromIterator<Product> for BatchRequest {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
enum BatchEnvelope {
    Batch { products: Vec<Product> },
}

impl From<BatchEnvelope> for BatchRequest {
    fn from(envelope: BatchEnvelope) -> Self {
        match envelope {
            BatchEnvelope::Batch { products } => Self { products },
        }
    }
}

impl From<BatchRequest> for BatchEnvelope {
    fn from(request: BatchRequest) -> Self {
        BatchEnvelope::Batch {
            products: request.products,
        }
    }
}
