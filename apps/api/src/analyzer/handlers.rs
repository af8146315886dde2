//! Axum route handlers for the Analyzer API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::analyzer::extract::extract_resume_text;
use crate::analyzer::scoring::AnalysisReport;
use crate::analyzer::store::{get_resume_with_analysis, insert_resume_with_analysis};
use crate::errors::AppError;
use crate::models::resume::{AnalysisResultRow, ResumeRecordRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub resume_id: Uuid,
    pub report: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume: ResumeRecordRow,
    pub analysis: Option<AnalysisResultRow>,
}

/// POST /api/v1/resumes/analyze
///
/// Multipart upload (`file` field) → text extraction → analysis →
/// persistence. The record and its analysis are created together and are
/// immutable afterwards.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("resume").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, bytes.to_vec()));
        }
    }

    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;

    let text = extract_resume_text(&file_name, &bytes)?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume contains no extractable text".to_string(),
        ));
    }

    let report = state.analyzer.analyze(&text).await?;
    let (resume, _analysis) =
        insert_resume_with_analysis(&state.resume_db, &file_name, &report).await?;

    Ok(Json(AnalyzeResponse {
        resume_id: resume.id,
        report,
    }))
}

/// GET /api/v1/resumes/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let (resume, analysis) = get_resume_with_analysis(&state.resume_db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    Ok(Json(ResumeDetailResponse { resume, analysis }))
}
