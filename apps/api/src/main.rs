mod catalog;
mod config;
mod errors;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, NormalizerKind};
use crate::matching::normalize::{SimpleSplitNormalizer, SkillNormalizer, StemmedNormalizer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // One normalizer instance serves catalog rows and query text alike,
    // so both sides of a match run the same pipeline.
    let normalizer: Arc<dyn SkillNormalizer> = match config.normalizer {
        NormalizerKind::Simple => Arc::new(SimpleSplitNormalizer),
        NormalizerKind::Stemmed => Arc::new(StemmedNormalizer::new()),
    };
    info!("Skill normalizer: {}", normalizer.name());
    info!("Job catalog: {}", config.catalog_path.display());

    // Build app state
    let state = AppState {
        config: config.clone(),
        normalizer,
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
