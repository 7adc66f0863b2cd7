use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: KeywordMatchScorer over the rule
    /// annotator, built once at startup.
    pub scorer: Arc<dyn MatchScorer>,
}
