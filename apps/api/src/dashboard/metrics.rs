//! Metrics Aggregator — time-windowed aggregate metrics over the resume store.
//!
//! For each window (today / this week / this month / all time) the aggregator
//! runs one parameterized LEFT JOIN query: resume count, average scores, and
//! the high-scoring count. Missing data never errors; empty windows yield
//! zeroed metrics.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// Resumes with an ats_score at or above this count as "high scoring".
pub const HIGH_SCORE_THRESHOLD: f64 = 70.0;

/// The four reporting windows, each defined by a lower bound on
/// `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricsWindow {
    Today,
    ThisWeek,
    ThisMonth,
    AllTime,
}

impl MetricsWindow {
    pub const ALL: [MetricsWindow; 4] = [
        MetricsWindow::Today,
        MetricsWindow::ThisWeek,
        MetricsWindow::ThisMonth,
        MetricsWindow::AllTime,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricsWindow::Today => "Today",
            MetricsWindow::ThisWeek => "This Week",
            MetricsWindow::ThisMonth => "This Month",
            MetricsWindow::AllTime => "All Time",
        }
    }

    /// Lower bound of the window relative to `now`. Day, week, and month
    /// windows open at UTC midnight; weeks start on Monday.
    pub fn start(self, now: DateTime<Utc>) -> DateTime<Utc> {
        let today = now.date_naive();
        match self {
            MetricsWindow::Today => midnight(today),
            MetricsWindow::ThisWeek => {
                let monday =
                    today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                midnight(monday)
            }
            MetricsWindow::ThisMonth => midnight(today.with_day(1).unwrap_or(today)),
            MetricsWindow::AllTime => all_time_start(),
        }
    }
}

/// Aggregate metrics for one window.
#[derive(Debug, Clone, Serialize)]
pub struct WindowMetrics {
    pub window: MetricsWindow,
    pub label: &'static str,
    pub total_resumes: i64,
    /// Average ats_score, rounded to 1 decimal; 0.0 when no scored rows.
    pub avg_ats_score: f64,
    /// Average keyword_match_score, rounded to 1 decimal; 0.0 when no
    /// scored rows.
    pub avg_keyword_score: f64,
    pub high_scoring: i64,
}

#[derive(FromRow)]
struct WindowAggRow {
    total_resumes: i64,
    avg_ats: Option<f64>,
    avg_keyword: Option<f64>,
    high_scoring: i64,
}

/// Computes aggregate metrics for every window relative to `now`.
pub async fn resume_metrics(
    pool: &SqlitePool,
    now: DateTime<Utc>,
) -> Result<Vec<WindowMetrics>, sqlx::Error> {
    let mut windows = Vec::with_capacity(MetricsWindow::ALL.len());

    for window in MetricsWindow::ALL {
        let row: WindowAggRow = sqlx::query_as(
            r#"
            SELECT
                COUNT(DISTINCT r.id) AS total_resumes,
                AVG(a.ats_score) AS avg_ats,
                AVG(a.keyword_match_score) AS avg_keyword,
                COUNT(DISTINCT CASE WHEN a.ats_score >= ? THEN r.id END) AS high_scoring
            FROM resumes r
            LEFT JOIN analyses a ON a.resume_id = r.id
            WHERE r.created_at >= ?
            "#,
        )
        .bind(HIGH_SCORE_THRESHOLD)
        .bind(window.start(now))
        .fetch_one(pool)
        .await?;

        windows.push(WindowMetrics {
            window,
            label: window.label(),
            total_resumes: row.total_resumes,
            avg_ats_score: round1(row.avg_ats.unwrap_or(0.0)),
            avg_keyword_score: round1(row.avg_keyword.unwrap_or(0.0)),
            high_scoring: row.high_scoring,
        });
    }

    Ok(windows)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// The "All Time" window opens at 2000-01-01; no record predates the product.
fn all_time_start() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .map(midnight)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{resume_pool, seed_resume};
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    // 2026-03-18 is a Wednesday.
    fn reference_now() -> DateTime<Utc> {
        utc(2026, 3, 18, 12)
    }

    #[test]
    fn test_today_window_starts_at_midnight() {
        let start = MetricsWindow::Today.start(reference_now());
        assert_eq!(start, utc(2026, 3, 18, 0));
    }

    #[test]
    fn test_week_window_starts_on_monday() {
        let start = MetricsWindow::ThisWeek.start(reference_now());
        assert_eq!(start, utc(2026, 3, 16, 0));
    }

    #[test]
    fn test_week_window_on_a_monday_is_that_day() {
        let start = MetricsWindow::ThisWeek.start(utc(2026, 3, 16, 9));
        assert_eq!(start, utc(2026, 3, 16, 0));
    }

    #[test]
    fn test_month_window_starts_on_the_first() {
        let start = MetricsWindow::ThisMonth.start(reference_now());
        assert_eq!(start, utc(2026, 3, 1, 0));
    }

    #[test]
    fn test_all_time_window_is_fixed() {
        let start = MetricsWindow::AllTime.start(reference_now());
        assert_eq!(start, utc(2000, 1, 1, 0));
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(71.666_666), 71.7);
        assert_eq!(round1(0.0), 0.0);
        assert_eq!(round1(80.04), 80.0);
    }

    #[tokio::test]
    async fn test_empty_store_yields_zeroed_metrics() {
        let pool = resume_pool().await;
        let windows = resume_metrics(&pool, reference_now()).await.unwrap();

        assert_eq!(windows.len(), 4);
        for w in windows {
            assert_eq!(w.total_resumes, 0);
            assert_eq!(w.avg_ats_score, 0.0);
            assert_eq!(w.avg_keyword_score, 0.0);
            assert_eq!(w.high_scoring, 0);
        }
    }

    #[tokio::test]
    async fn test_windows_bucket_by_creation_time() {
        let pool = resume_pool().await;
        let now = reference_now();

        // Today, this week, this month, all time.
        seed_resume(&pool, "Python,SQL", utc(2026, 3, 18, 8), Some((80.0, 90.0))).await;
        // This month but not this week (Mar 8 < Mon Mar 16).
        seed_resume(&pool, "Go", utc(2026, 3, 8, 12), Some((60.0, 50.0))).await;
        // All time only.
        seed_resume(&pool, "Rust", utc(2026, 2, 6, 12), Some((75.0, 75.0))).await;

        let windows = resume_metrics(&pool, now).await.unwrap();
        let by_window = |w: MetricsWindow| {
            windows
                .iter()
                .find(|m| m.window == w)
                .expect("window present")
        };

        let today = by_window(MetricsWindow::Today);
        assert_eq!(today.total_resumes, 1);
        assert_eq!(today.avg_ats_score, 80.0);
        assert_eq!(today.avg_keyword_score, 90.0);
        assert_eq!(today.high_scoring, 1);

        let week = by_window(MetricsWindow::ThisWeek);
        assert_eq!(week.total_resumes, 1);

        let month = by_window(MetricsWindow::ThisMonth);
        assert_eq!(month.total_resumes, 2);
        assert_eq!(month.avg_ats_score, 70.0);
        assert_eq!(month.high_scoring, 1);

        let all_time = by_window(MetricsWindow::AllTime);
        assert_eq!(all_time.total_resumes, 3);
        assert_eq!(all_time.avg_ats_score, 71.7);
        assert_eq!(all_time.avg_keyword_score, 71.7);
        assert_eq!(all_time.high_scoring, 2);
    }

    #[tokio::test]
    async fn test_unanalyzed_resume_counts_without_skewing_averages() {
        let pool = resume_pool().await;
        let now = reference_now();

        seed_resume(&pool, "", utc(2026, 3, 18, 8), None).await;

        let windows = resume_metrics(&pool, now).await.unwrap();
        let today = windows
            .iter()
            .find(|m| m.window == MetricsWindow::Today)
            .unwrap();

        assert_eq!(today.total_resumes, 1);
        assert_eq!(today.avg_ats_score, 0.0);
        assert_eq!(today.high_scoring, 0);
    }

    #[tokio::test]
    async fn test_all_time_counts_records_back_to_epoch_start() {
        let pool = resume_pool().await;
        let now = reference_now();

        seed_resume(&pool, "COBOL", utc(2001, 6, 1, 0), Some((40.0, 30.0))).await;

        let windows = resume_metrics(&pool, now).await.unwrap();
        let all_time = windows
            .iter()
            .find(|m| m.window == MetricsWindow::AllTime)
            .unwrap();
        let month = windows
            .iter()
            .find(|m| m.window == MetricsWindow::ThisMonth)
            .unwrap();

        assert_eq!(all_time.total_resumes, 1);
        assert_eq!(month.total_resumes, 0);
    }

    #[tokio::test]
    async fn test_averages_stay_in_score_range() {
        let pool = resume_pool().await;
        let now = reference_now();

        seed_resume(&pool, "Python", utc(2026, 3, 18, 1), Some((100.0, 0.0))).await;
        seed_resume(&pool, "SQL", utc(2026, 3, 18, 2), Some((0.0, 100.0))).await;

        let windows = resume_metrics(&pool, now).await.unwrap();
        for w in windows {
            assert!((0.0..=100.0).contains(&w.avg_ats_score));
            assert!((0.0..=100.0).contains(&w.avg_keyword_score));
        }
    }
}
