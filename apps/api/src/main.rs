mod annotate;
mod config;
mod errors;
mod matching;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::annotate::RuleAnnotator;
use crate::config::Config;
use crate::matching::scorer::KeywordMatchScorer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (every variable has a default)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cvmatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the annotator once; it is read-only afterwards and shared
    // across requests behind the scorer seam.
    let annotator = Arc::new(RuleAnnotator::new(
        &config.stopword_lang,
        config.max_text_len,
    ));
    info!(
        "Rule annotator initialized (language: {}, max input: {} chars)",
        config.stopword_lang, config.max_text_len
    );

    // Initialize match scorer (KeywordMatchScorer over the rule annotator)
    let scorer = Arc::new(KeywordMatchScorer::new(annotator));

    // Build app state
    let state = AppState {
        config: config.clone(),
        scorer,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
