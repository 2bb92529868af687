use std::sync::Arc;

use crate::backend::BackendApi;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// NextHire backend. `HttpBackend` in production, a fake in tests.
    pub backend: Arc<dyn BackendApi>,
    pub sessions: SessionStore,
}
