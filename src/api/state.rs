//! Application state for the quote engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{InMemoryQuoteStore, QuoteStore};

/// Shared application state.
///
/// Holds the loaded configuration and the quote store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn QuoteStore>,
}

impl AppState {
    /// Creates a new application state with the given configuration and store.
    pub fn new(config: ConfigLoader, store: Arc<dyn QuoteStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Creates application state backed by an empty in-memory store.
    pub fn with_in_memory_store(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(InMemoryQuoteStore::new()))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the quote store.
    pub fn store(&self) -> &dyn QuoteStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_the_store() {
        let config = ConfigLoader::load("./config/leo").unwrap();
        let state = AppState::with_in_memory_store(config);
        let clone = state.clone();

        let saved = state
            .store()
            .save(&crate::models::ShipmentForm::default())
            .unwrap();
        assert!(clone.store().get(saved.id).is_ok());
    }
}
