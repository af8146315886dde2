use std::sync::Arc;

use sqlx::SqlitePool;

use crate::analyzer::scoring::ResumeAnalyzer;
use crate::builder::render::ResumeBuilder;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Each SQLite pool is a process-wide handle opened once at startup; this
/// service adds no transaction scoping or locking of its own.
#[derive(Clone)]
pub struct AppState {
    pub resume_db: SqlitePool,
    pub feedback_db: SqlitePool,
    pub config: Config,
    /// Pluggable analysis backend. Default: KeywordResumeAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Pluggable build backend. Default: MarkdownResumeBuilder.
    pub builder: Arc<dyn ResumeBuilder>,
}
