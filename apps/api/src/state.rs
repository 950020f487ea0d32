use std::sync::Arc;

use crate::catalog::FacultyCatalog;
use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only; fully loaded before the router is built.
    pub catalog: FacultyCatalog,
    /// Default: `LlmClient`. Tests swap in a stub.
    pub llm: Arc<dyn CompletionService>,
    pub config: Config,
}
