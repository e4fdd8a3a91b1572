use std::collections::HashMap;

use tracing::instrument;

use catalogue_core::{AggregateRoot, CatalogueError, CatalogueResult, Entity, ProductId};

use crate::batch::BatchRequest;
use crate::product::Product;
use crate::reorder::ReorderReport;
use crate::search::{SearchCriteria, SearchFilter, SearchResult};

/// Aggregate root: Catalogue.
///
/// Owns its products exclusively, keyed by [`ProductId`]. Queries hand out shared
/// borrows; removal hands ownership back to the caller.
///
/// Iteration follows first-insertion order. Overwriting a product keeps its
/// original position.
///
/// There is no internal locking: mutation needs `&mut self`, so callers sharing a
/// catalogue across threads wrap it in their own `Mutex`/`RwLock`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    name: String,
    products: HashMap<ProductId, Product>,
    order: Vec<ProductId>,
    version: u64,
}

impl Catalogue {
    /// Create an empty catalogue labeled `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            products: HashMap::new(),
            order: Vec::new(),
            version: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.order.iter().filter_map(|id| self.products.get(id))
    }

    /// Product ids in insertion order.
    pub fn product_ids(&self) -> impl Iterator<Item = &ProductId> {
        self.order.iter()
    }

    /// Insert `product`, overwriting any product already stored under its id.
    ///
    /// Returns the overwritten product, if any. Uniqueness is not enforced here;
    /// use [`Catalogue::batch_add_products`] for a checked insert.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        let id = product.id().clone();
        let previous = self.insert(product);
        self.version += 1;

        tracing::debug!(
            catalogue = %self.name,
            product_id = %id,
            overwritten = previous.is_some(),
            "product added"
        );
        previous
    }

    pub fn find_product_by_id(&self, id: &str) -> Option<&Product> {
        let found = self.products.get(id);
        tracing::trace!(catalogue = %self.name, product_id = id, found = found.is_some(), "product lookup");
        found
    }

    /// Remove and return the product stored under `id`, if present.
    pub fn remove_product_by_id(&mut self, id: &str) -> Option<Product> {
        let removed = self.products.remove(id)?;
        self.order.retain(|existing| existing.as_str() != id);
        self.version += 1;

        tracing::debug!(catalogue = %self.name, product_id = id, "product removed");
        Some(removed)
    }

    /// Add every in-stock product of `batch`, or none at all.
    ///
    /// The whole batch is checked against the ids already in the catalogue before
    /// anything is inserted; any collision fails the call with
    /// [`CatalogueError::BadBatch`] and leaves the catalogue untouched. Products
    /// with zero stock are skipped without error. Returns the number of products
    /// inserted.
    #[instrument(level = "debug", skip_all, fields(catalogue = %self.name, submitted = batch.len()))]
    pub fn batch_add_products(&mut self, batch: BatchRequest) -> CatalogueResult<usize> {
        let conflicting = self.conflicting_ids(&batch);
        if !conflicting.is_empty() {
            tracing::warn!(
                catalogue = %self.name,
                conflicts = conflicting.len(),
                "batch rejected: product ids already in catalogue"
            );
            return Err(CatalogueError::bad_batch(conflicting));
        }

        let submitted = batch.len();
        let staged: Vec<Product> = batch
            .products
            .into_iter()
            .filter(Product::is_in_stock)
            .collect();
        let skipped = submitted - staged.len();

        // Ids inside the batch may repeat; the later entry wins and is counted once.
        let mut added = 0;
        for product in staged {
            if self.insert(product).is_none() {
                added += 1;
            }
        }
        if added > 0 {
            self.version += 1;
        }

        tracing::debug!(added, skipped, "batch committed");
        Ok(added)
    }

    /// Report every product whose stock is at or below its reorder level.
    pub fn check_reorders(&self) -> ReorderReport {
        let report: ReorderReport = self
            .iter()
            .filter(|product| product.needs_reorder())
            .map(|product| product.id().clone())
            .collect();

        tracing::trace!(catalogue = %self.name, flagged = report.len(), "reorder check");
        report
    }

    /// Search by maximum price or by name keyword.
    ///
    /// Criteria naming neither filter, or both, fail with
    /// [`CatalogueError::BadSearch`].
    pub fn search(&self, criteria: SearchCriteria) -> CatalogueResult<SearchResult> {
        let filter = criteria.into_filter().inspect_err(|err| {
            tracing::debug!(catalogue = %self.name, error = %err, "search rejected");
        })?;
        Ok(self.search_with(&filter))
    }

    /// Run an already-resolved filter over the catalogue.
    pub fn search_with(&self, filter: &SearchFilter) -> SearchResult {
        let result: SearchResult = self
            .iter()
            .filter(|product| filter.matches(product))
            .map(|product| product.id().clone())
            .collect();

        tracing::trace!(catalogue = %self.name, ?filter, matched = result.len(), "search");
        result
    }

    fn conflicting_ids(&self, batch: &BatchRequest) -> Vec<ProductId> {
        let mut conflicting: Vec<ProductId> = Vec::new();
        for id in batch.product_ids() {
            if self.products.contains_key(id) && !conflicting.contains(id) {
                conflicting.push(id.clone());
            }
        }
        conflicting
    }

    fn insert(&mut self, product: Product) -> Option<Product> {
        let id = product.id().clone();
        let previous = self.products.insert(id.clone(), product);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }
}

impl AggregateRoot for Catalogue {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }

    fn version(&self) -> u64 {
        self.version
    }
}
