//! Axum route handlers for the Dashboard API.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::dashboard::metrics::{resume_metrics, WindowMetrics};
use crate::dashboard::skills::{top_skills, SkillCount, TOP_SKILLS_LIMIT};
use crate::dashboard::trends::{weekly_trend, TrendPoint};
use crate::dashboard::view::{headline_cards, skill_chart, trend_chart, ChartSeries, MetricCard};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub cards: Vec<MetricCard>,
    pub skill_chart: ChartSeries,
    pub trend_chart: ChartSeries,
}

/// GET /api/v1/dashboard
///
/// The full dashboard view: headline cards plus both chart series.
pub async fn handle_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let now = Utc::now();

    let metrics = resume_metrics(&state.resume_db, now).await?;
    let skills = top_skills(&state.resume_db, TOP_SKILLS_LIMIT).await?;
    let trend = weekly_trend(&state.resume_db, now).await?;

    Ok(Json(DashboardResponse {
        cards: headline_cards(&metrics),
        skill_chart: skill_chart(&skills),
        trend_chart: trend_chart(&trend),
    }))
}

/// GET /api/v1/dashboard/metrics
pub async fn handle_metrics(
    State(state): State<AppState>,
) -> Result<Json<Vec<WindowMetrics>>, AppError> {
    let metrics = resume_metrics(&state.resume_db, Utc::now()).await?;
    Ok(Json(metrics))
}

/// GET /api/v1/dashboard/skills
pub async fn handle_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillCount>>, AppError> {
    let skills = top_skills(&state.resume_db, TOP_SKILLS_LIMIT).await?;
    Ok(Json(skills))
}

/// GET /api/v1/dashboard/trends
pub async fn handle_trends(
    State(state): State<AppState>,
) -> Result<Json<Vec<TrendPoint>>, AppError> {
    let trend = weekly_trend(&state.resume_db, Utc::now()).await?;
    Ok(Json(trend))
}
