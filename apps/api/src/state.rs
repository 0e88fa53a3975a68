use std::sync::Arc;

use crate::config::Config;
use crate::github::ProfileLookup;
use crate::storage::Store;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Injected storage backend: Postgres when configured, in-memory
    /// otherwise.
    pub store: Arc<dyn Store>,
    /// Profile-reputation lookup. Tests swap in a fake implementation.
    pub lookup: Arc<dyn ProfileLookup>,
    pub config: Config,
}
