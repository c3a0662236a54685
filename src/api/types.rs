//! Shared state for the reporting API.

use std::sync::Arc;

use crate::store::LearningStore;

/// Shared context for all API routes: the store handle, constructed once
/// at process start and cloned per request.
#[derive(Clone)]
pub struct ApiContext {
    pub store: Arc<dyn LearningStore>,
}

impl ApiContext {
    pub fn new(store: Arc<dyn LearningStore>) -> Self {
        Self { store }
    }
}
