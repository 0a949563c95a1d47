//! In-process quote store.

use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{QuoteRecord, ShipmentForm};

use super::QuoteStore;

/// A [`QuoteStore`] that keeps quotes in memory for the life of the process.
///
/// # Example
///
/// ```
/// use quote_engine::models::ShipmentForm;
/// use quote_engine::store::{InMemoryQuoteStore, QuoteStore};
///
/// let store = InMemoryQuoteStore::new();
/// let saved = store.save(&ShipmentForm::default())?;
/// assert_eq!(store.get(saved.id)?.id, saved.id);
/// # Ok::<(), quote_engine::error::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct InMemoryQuoteStore {
    quotes: RwLock<Vec<QuoteRecord>>,
}

impl InMemoryQuoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an already-built record with a chosen timestamp.
    #[cfg(test)]
    pub(crate) fn insert(&self, record: QuoteRecord) -> EngineResult<()> {
        let mut quotes = self.quotes.write().map_err(|_| poisoned())?;
        quotes.push(record);
        Ok(())
    }
}

fn poisoned() -> EngineError {
    EngineError::StorageError {
        message: "quote store lock poisoned".to_string(),
    }
}

impl QuoteStore for InMemoryQuoteStore {
    fn save(&self, form: &ShipmentForm) -> EngineResult<QuoteRecord> {
        let record = QuoteRecord {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            details: form.details(),
            charges: form.charges(),
        };

        let mut quotes = self.quotes.write().map_err(|_| poisoned())?;
        quotes.push(record.clone());
        debug!(quote_id = %record.id, stored = quotes.len(), "Quote saved");

        Ok(record)
    }

    fn get(&self, id: Uuid) -> EngineResult<QuoteRecord> {
        let quotes = self.quotes.read().map_err(|_| poisoned())?;
        quotes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| EngineError::QuoteNotFound { id: id.to_string() })
    }

    fn list(&self) -> EngineResult<Vec<QuoteRecord>> {
        let quotes = self.quotes.read().map_err(|_| poisoned())?;
        // Reverse first so quotes saved within the same instant keep newest-first order.
        let mut newest_first: Vec<QuoteRecord> = quotes.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(newest_first)
    }
}
