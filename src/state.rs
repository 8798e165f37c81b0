//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::db::InventoryStore;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// The one database handle, created at startup
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        Self { store }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
