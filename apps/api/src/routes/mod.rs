pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyzer::handlers as analyzer_handlers;
use crate::builder::handlers as builder_handlers;
use crate::dashboard::handlers as dashboard_handlers;
use crate::feedback::handlers as feedback_handlers;
use crate::pages;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Navigation
        .route("/api/v1/pages", get(pages::handle_list_pages))
        .route("/api/v1/pages/:slug", get(pages::handle_page))
        // Analyzer API
        .route(
            "/api/v1/resumes/analyze",
            post(analyzer_handlers::handle_analyze),
        )
        .route(
            "/api/v1/resumes/:id",
            get(analyzer_handlers::handle_get_resume),
        )
        // Builder API
        .route(
            "/api/v1/resumes/build",
            post(builder_handlers::handle_build),
        )
        // Dashboard API
        .route(
            "/api/v1/dashboard",
            get(dashboard_handlers::handle_dashboard),
        )
        .route(
            "/api/v1/dashboard/metrics",
            get(dashboard_handlers::handle_metrics),
        )
        .route(
            "/api/v1/dashboard/skills",
            get(dashboard_handlers::handle_skills),
        )
        .route(
            "/api/v1/dashboard/trends",
            get(dashboard_handlers::handle_trends),
        )
        // Feedback API
        .route(
            "/api/v1/feedback",
            post(feedback_handlers::handle_submit).get(feedback_handlers::handle_recent),
        )
        .route(
            "/api/v1/feedback/stats",
            get(feedback_handlers::handle_stats),
        )
        .with_state(state)
}
