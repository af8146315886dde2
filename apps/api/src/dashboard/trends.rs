//! Trend Series — resume submissions per calendar day over the trailing week.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

pub const TREND_DAYS: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub count: i64,
}

/// Last 3 characters of the ISO date, e.g. "-07" for the 7th. The compact
/// day-of-month form used on the trend chart's x axis.
pub fn day_label(date: NaiveDate) -> String {
    let iso = date.format("%Y-%m-%d").to_string();
    iso[iso.len() - 3..].to_string()
}

/// The 7 calendar days ending at `today` inclusive, oldest first.
pub fn trailing_days(today: NaiveDate) -> Vec<NaiveDate> {
    (0..TREND_DAYS as i64)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect()
}

/// Counts resumes created on each of the trailing 7 calendar days,
/// ignoring time-of-day. Always returns exactly 7 points, oldest first.
pub async fn weekly_trend(
    pool: &SqlitePool,
    now: DateTime<Utc>,
) -> Result<Vec<TrendPoint>, sqlx::Error> {
    let mut points = Vec::with_capacity(TREND_DAYS);

    for day in trailing_days(now.date_naive()) {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM resumes WHERE DATE(created_at) = ?")
                .bind(day)
                .fetch_one(pool)
                .await?;
        points.push(TrendPoint {
            label: day_label(day),
            count,
        });
    }

    Ok(points)
}
