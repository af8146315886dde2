//! Axum route handlers for the Feedback API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::feedback::store::{
    feedback_stats, recent_feedback, save_feedback, FeedbackStats, NewFeedback,
};
use crate::models::feedback::FeedbackRow;
use crate::state::AppState;

const RATING_RANGE: std::ops::RangeInclusive<i64> = 1..=5;
const DEFAULT_RECENT_LIMIT: i64 = 20;

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// `null` when no feedback has been submitted yet.
    pub stats: Option<FeedbackStats>,
}

/// POST /api/v1/feedback
///
/// Persists one submission with a server-assigned timestamp.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(new): Json<NewFeedback>,
) -> Result<Json<FeedbackRow>, AppError> {
    for (field, value) in [
        ("rating", new.rating),
        ("usability_score", new.usability_score),
        ("feature_satisfaction", new.feature_satisfaction),
    ] {
        if !RATING_RANGE.contains(&value) {
            return Err(AppError::Validation(format!(
                "{field} must be between 1 and 5, got {value}"
            )));
        }
    }

    let row = save_feedback(&state.feedback_db, new).await?;
    Ok(Json(row))
}

/// GET /api/v1/feedback
pub async fn handle_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<FeedbackRow>>, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT).max(0);
    let rows = recent_feedback(&state.feedback_db, limit).await?;
    Ok(Json(rows))
}

/// GET /api/v1/feedback/stats
///
/// Column-wise averages; an empty store yields `stats: null`, never an error.
pub async fn handle_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = feedback_stats(&state.feedback_db).await?;
    Ok(Json(StatsResponse { stats }))
}
