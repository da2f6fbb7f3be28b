use std::sync::Arc;

use crate::render::PageRenderer;
use crate::store::MessageStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Backend picked from `Config::store` at startup.
    pub store: Arc<dyn MessageStore>,
    /// Compiled page templates plus the static portfolio content.
    pub pages: Arc<PageRenderer>,
}
