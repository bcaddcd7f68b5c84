use std::sync::Arc;

use crate::auth::IdentityVerifier;
use crate::config::Config;
use crate::llm_client::CompletionProvider;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every client is constructed by `main` and passed in; nothing is global.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub llm: Arc<dyn CompletionProvider>,
    pub verifier: Arc<dyn IdentityVerifier>,
    pub config: Config,
}
