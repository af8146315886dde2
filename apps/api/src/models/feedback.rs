use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per submitted feedback form. Created on submission, never
/// updated or deleted. Rating columns are integers in 1..=5.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub rating: i64,
    pub usability_score: i64,
    pub feature_satisfaction: i64,
    pub missing_features: String,
    pub improvement_suggestions: String,
    pub user_experience: String,
    pub submitted_at: DateTime<Utc>,
}
