//! Shared application state for all routes.

use crate::store::MessageStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Injected storage handle; shared by every request.
    pub store: Arc<dyn MessageStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        AppState { store }
    }
}
