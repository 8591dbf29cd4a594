use std::sync::Arc;

use crate::config::Config;
use crate::extract::DocumentExtractor;
use crate::grammar::GrammarChecker;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Storage,
    /// Pluggable document-to-text backend. Default: PdfExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
    /// Grammar client built once at startup. Default: LanguageToolClient.
    pub grammar: Arc<dyn GrammarChecker>,
}
