//! Application state for the cafe operations API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{CafeConfig, ConfigLoader};
use crate::store::{MemoryStore, OpsStore};

/// Shared application state.
///
/// Contains the loaded configuration and the record store, shared across
/// all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    store: Arc<dyn OpsStore>,
}

impl AppState {
    /// Creates a new application state with the given configuration and
    /// store.
    pub fn new(config: ConfigLoader, store: Arc<dyn OpsStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Creates an application state backed by an empty in-memory store.
    pub fn in_memory(config: ConfigLoader) -> Self {
        Self::new(config, Arc::new(MemoryStore::new()))
    }

    /// Returns the cafe configuration.
    pub fn config(&self) -> &CafeConfig {
        self.config.config()
    }

    /// Returns the record store.
    pub fn store(&self) -> &dyn OpsStore {
        self.store.as_ref()
    }
}
