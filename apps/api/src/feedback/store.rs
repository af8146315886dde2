//! Feedback Store — persists submitted feedback and computes column-wise
//! averages. Records are write-once: never updated, never deleted.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::models::feedback::FeedbackRow;

/// A feedback submission before persistence. The three ratings come from
/// 1-5 sliders; the text fields may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFeedback {
    pub rating: i64,
    pub usability_score: i64,
    pub feature_satisfaction: i64,
    #[serde(default)]
    pub missing_features: String,
    #[serde(default)]
    pub improvement_suggestions: String,
    #[serde(default)]
    pub user_experience: String,
}

/// Arithmetic means of the rating columns across every stored record.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackStats {
    pub avg_rating: f64,
    pub avg_usability: f64,
    pub avg_feature_satisfaction: f64,
    pub total_submissions: i64,
}

/// Persists one record with a server-assigned timestamp and returns the
/// stored row.
pub async fn save_feedback(
    pool: &SqlitePool,
    new: NewFeedback,
) -> Result<FeedbackRow, sqlx::Error> {
    let row = FeedbackRow {
        id: Uuid::new_v4(),
        rating: new.rating,
        usability_score: new.usability_score,
        feature_satisfaction: new.feature_satisfaction,
        missing_features: new.missing_features,
        improvement_suggestions: new.improvement_suggestions,
        user_experience: new.user_experience,
        submitted_at: Utc::now(),
    };

    sqlx::query(
        r#"
        INSERT INTO feedback
            (id, rating, usability_score, feature_satisfaction,
             missing_features, improvement_suggestions, user_experience, submitted_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(row.id)
    .bind(row.rating)
    .bind(row.usability_score)
    .bind(row.feature_satisfaction)
    .bind(&row.missing_features)
    .bind(&row.improvement_suggestions)
    .bind(&row.user_experience)
    .bind(row.submitted_at)
    .execute(pool)
    .await?;

    Ok(row)
}

#[derive(FromRow)]
struct StatsRow {
    total: i64,
    avg_rating: Option<f64>,
    avg_usability: Option<f64>,
    avg_satisfaction: Option<f64>,
}

/// Column-wise averages over all records, or `None` when no records exist.
/// An empty store is an empty result, not an error.
pub async fn feedback_stats(pool: &SqlitePool) -> Result<Option<FeedbackStats>, sqlx::Error> {
    let row: StatsRow = sqlx::query_as(
        r#"
        SELECT
            COUNT(*) AS total,
            AVG(rating) AS avg_rating,
            AVG(usability_score) AS avg_usability,
            AVG(feature_satisfaction) AS avg_satisfaction
        FROM feedback
        "#,
    )
    .fetch_one(pool)
    .await?;

    if row.total == 0 {
        return Ok(None);
    }

    Ok(Some(FeedbackStats {
        avg_rating: row.avg_rating.unwrap_or(0.0),
        avg_usability: row.avg_usability.unwrap_or(0.0),
        avg_feature_satisfaction: row.avg_satisfaction.unwrap_or(0.0),
        total_submissions: row.total,
    }))
}

/// Most recent records, newest first.
pub async fn recent_feedback(
    pool: &SqlitePool,
    limit: i64,
) -> Result<Vec<FeedbackRow>, sqlx::Error> {
    sqlx::query_as::<_, FeedbackRow>(
        "SELECT * FROM feedback ORDER BY submitted_at DESC LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::feedback_pool;

    fn feedback(rating: i64, usability: i64, satisfaction: i64) -> NewFeedback {
        NewFeedback {
            rating,
            usability_score: usability,
            feature_satisfaction: satisfaction,
            missing_features: String::new(),
            improvement_suggestions: String::new(),
            user_experience: String::new(),
        }
    }

    #[tokio::test]
    async fn test_stats_mean_over_three_records() {
        let pool = feedback_pool().await;

        save_feedback(&pool, feedback(5, 4, 3)).await.unwrap();
        save_feedback(&pool, feedback(3, 4, 5)).await.unwrap();
        save_feedback(&pool, feedback(4, 4, 4)).await.unwrap();

        let stats = feedback_stats(&pool).await.unwrap().unwrap();
        assert_eq!(stats.avg_rating, 4.0);
        assert_eq!(stats.avg_usability, 4.0);
        assert_eq!(stats.avg_feature_satisfaction, 4.0);
        assert_eq!(stats.total_submissions, 3);
    }

    #[tokio::test]
    async fn test_stats_empty_store_is_none() {
        let pool = feedback_pool().await;
        assert!(feedback_stats(&pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_single_record_round_trips_unchanged() {
        let pool = feedback_pool().await;

        let saved = save_feedback(
            &pool,
            NewFeedback {
                rating: 4,
                usability_score: 2,
                feature_satisfaction: 5,
                missing_features: "dark mode".to_string(),
                improvement_suggestions: "faster uploads".to_string(),
                user_experience: "solid overall".to_string(),
            },
        )
        .await
        .unwrap();

        let stats = feedback_stats(&pool).await.unwrap().unwrap();
        assert_eq!(stats.avg_rating, 4.0);
        assert_eq!(stats.avg_usability, 2.0);
        assert_eq!(stats.avg_feature_satisfaction, 5.0);

        let recent = recent_feedback(&pool, 10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, saved.id);
        assert_eq!(recent[0].missing_features, "dark mode");
        assert_eq!(recent[0].user_experience, "solid overall");
    }

    #[tokio::test]
    async fn test_recent_feedback_newest_first_and_limited() {
        let pool = feedback_pool().await;

        for rating in 1..=4 {
            save_feedback(&pool, feedback(rating, 3, 3)).await.unwrap();
        }

        let recent = recent_feedback(&pool, 2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert!(recent[0].submitted_at >= recent[1].submitted_at);
    }

    #[tokio::test]
    async fn test_stats_survive_store_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.db");
        let path = path.to_string_lossy().to_string();

        {
            let pool = crate::db::create_pool(&path).await.unwrap();
            crate::db::init_feedback_schema(&pool).await.unwrap();
            save_feedback(&pool, feedback(5, 5, 5)).await.unwrap();
            pool.close().await;
        }

        let pool = crate::db::create_pool(&path).await.unwrap();
        crate::db::init_feedback_schema(&pool).await.unwrap();

        let stats = feedback_stats(&pool).await.unwrap().unwrap();
        assert_eq!(stats.avg_rating, 5.0);
        assert_eq!(stats.total_submissions, 1);
    }
}
