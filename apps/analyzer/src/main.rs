mod analysis;
mod config;
mod errors;
mod extract;
mod grammar;
mod reference;
mod report;
mod routes;
mod state;
mod storage;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfExtractor;
use crate::grammar::LanguageToolClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::{spawn_sweeper, Storage};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer v{}", env!("CARGO_PKG_VERSION"));

    // Artifact directories + expiry
    let storage = Storage::init(&config.data_dir).await?;
    let _sweeper = spawn_sweeper(storage.clone(), config.artifact_ttl, config.cleanup_interval);
    info!(
        "Artifact sweeper running every {}s (ttl {}s)",
        config.cleanup_interval.as_secs(),
        config.artifact_ttl.as_secs()
    );

    // Initialize grammar client (one handle for the process lifetime)
    let grammar = LanguageToolClient::new(
        &config.languagetool_url,
        &config.grammar_language,
        config.grammar_timeout,
    )?;
    info!(
        "Grammar client initialized ({}, language: {}, timeout: {}s)",
        config.languagetool_url,
        grammar.language(),
        config.grammar_timeout.as_secs()
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        storage,
        extractor: Arc::new(PdfExtractor),
        grammar: Arc::new(grammar),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
