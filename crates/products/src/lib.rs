//! Product catalogue domain module.
//!
//! This crate contains the catalogue aggregate and its products, implemented
//! purely as deterministic in-memory domain logic (no IO, no HTTP, no storage).

pub mod batch;
pub mod catalogue;
pub mod product;
pub mod reorder;
pub mod search;

pub use batch::BatchRequest;
pub use catalogue::Catalogue;
pub use product::Product;
pub use reorder::ReorderReport;
pub use search::{SearchCriteria, SearchFilter, SearchResult};
