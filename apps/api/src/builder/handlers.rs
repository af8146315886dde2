//! Axum route handlers for the Builder API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::builder::form::ResumeForm;
use crate::builder::render::BuiltResume;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub resume: BuiltResume,
}

/// POST /api/v1/resumes/build
///
/// Renders the structured form into a finished document. Nothing is
/// persisted; the document is returned to the caller.
pub async fn handle_build(
    State(state): State<AppState>,
    Json(form): Json<ResumeForm>,
) -> Result<Json<BuildResponse>, AppError> {
    let resume = state.builder.build(&form).await?;
    Ok(Json(BuildResponse { resume }))
}
