//! Quote persistence.
//!
//! Stores keep the raw form inputs of a saved quote keyed by a generated id.
//! The breakdown is never stored; callers recompute it from
//! [`QuoteRecord::charges`](crate::models::QuoteRecord) on every read.

mod memory;

pub use memory::InMemoryQuoteStore;

use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{QuoteRecord, ShipmentForm};

/// A place to save and look up quotes.
pub trait QuoteStore: Send + Sync {
    /// Parses and saves a quote form, returning the stored record.
    fn save(&self, form: &ShipmentForm) -> EngineResult<QuoteRecord>;

    /// Looks up a quote by id, failing with `QuoteNotFound` when absent.
    fn get(&self, id: Uuid) -> EngineResult<QuoteRecord>;

    /// All saved quotes, newest first.
    fn list(&self) -> EngineResult<Vec<QuoteRecord>>;
}
