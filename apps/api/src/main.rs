mod analyzer;
mod builder;
mod config;
mod dashboard;
mod db;
mod errors;
mod feedback;
mod models;
mod pages;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analyzer::scoring::KeywordResumeAnalyzer;
use crate::builder::render::MarkdownResumeBuilder;
use crate::config::Config;
use crate::db::{create_pool, init_feedback_schema, init_resume_schema};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Insight API v{}", env!("CARGO_PKG_VERSION"));

    // Open both single-file stores and lay down their implicit schemas.
    let resume_db = create_pool(&config.resume_db_path).await?;
    init_resume_schema(&resume_db).await?;
    info!("Resume store ready ({})", config.resume_db_path);

    let feedback_db = create_pool(&config.feedback_db_path).await?;
    init_feedback_schema(&feedback_db).await?;
    info!("Feedback store ready ({})", config.feedback_db_path);

    // Default backends behind the analyzer/builder seams.
    let analyzer = Arc::new(KeywordResumeAnalyzer);
    let builder = Arc::new(MarkdownResumeBuilder);
    info!("Analyzer backend: keyword");

    let state = AppState {
        resume_db,
        feedback_db,
        config: config.clone(),
        analyzer,
        builder,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
