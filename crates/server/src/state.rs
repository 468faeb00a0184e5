//! Application state shared across handlers.

use std::sync::Arc;

use crate::store::LoyaltyStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Each instance owns its own
/// store, so tests can build as many isolated states as they need.
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    store: LoyaltyStore,
}

impl AppState {
    /// Create application state around an existing store.
    #[must_use]
    pub fn new(store: LoyaltyStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { store }),
        }
    }

    /// Get a reference to the loyalty store.
    #[must_use]
    pub fn store(&self) -> &LoyaltyStore {
        &self.inner.store
    }
}
