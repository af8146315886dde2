//! Persistence for analysis submissions. One resume row plus one analysis
//! row per submission; both are write-once.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::analyzer::scoring::AnalysisReport;
use crate::models::resume::{AnalysisResultRow, ResumeRecordRow};

/// Inserts the resume record and its analysis result. Detected skills are
/// stored as the comma-delimited string the dashboard tokenizes later.
pub async fn insert_resume_with_analysis(
    pool: &SqlitePool,
    file_name: &str,
    report: &AnalysisReport,
) -> Result<(ResumeRecordRow, AnalysisResultRow), sqlx::Error> {
    let now = Utc::now();

    let resume = ResumeRecordRow {
        id: Uuid::new_v4(),
        file_name: file_name.to_string(),
        skills: report.skills.join(","),
        created_at: now,
    };

    sqlx::query("INSERT INTO resumes (id, file_name, skills, created_at) VALUES (?, ?, ?, ?)")
        .bind(resume.id)
        .bind(&resume.file_name)
        .bind(&resume.skills)
        .bind(resume.created_at)
        .execute(pool)
        .await?;

    let analysis = AnalysisResultRow {
        id: Uuid::new_v4(),
        resume_id: resume.id,
        ats_score: report.ats_score,
        keyword_match_score: report.keyword_match_score,
        created_at: now,
    };

    sqlx::query(
        "INSERT INTO analyses (id, resume_id, ats_score, keyword_match_score, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(analysis.id)
    .bind(analysis.resume_id)
    .bind(analysis.ats_score)
    .bind(analysis.keyword_match_score)
    .bind(analysis.created_at)
    .execute(pool)
    .await?;

    Ok((resume, analysis))
}

/// Fetches a resume record and, when present, its analysis result.
pub async fn get_resume_with_analysis(
    pool: &SqlitePool,
    id: Uuid,
) -> Result<Option<(ResumeRecordRow, Option<AnalysisResultRow>)>, sqlx::Error> {
    let resume = sqlx::query_as::<_, ResumeRecordRow>("SELECT * FROM resumes WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    let Some(resume) = resume else {
        return Ok(None);
    };

    let analysis =
        sqlx::query_as::<_, AnalysisResultRow>("SELECT * FROM analyses WHERE resume_id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(Some((resume, analysis)))
}
