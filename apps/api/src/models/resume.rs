use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per submitted resume. Created on analysis submission,
/// immutable thereafter, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRecordRow {
    pub id: Uuid,
    pub file_name: String,
    /// Comma-delimited skill tokens, as detected at analysis time.
    pub skills: String,
    pub created_at: DateTime<Utc>,
}

/// One row per resume, holding the 0-100 analysis scores. Linked to its
/// resume by `resume_id` (convention only; no FK constraint in the store).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisResultRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub ats_score: f64,
    pub keyword_match_score: f64,
    pub created_at: DateTime<Utc>,
}
