//! Dashboard view assembly — headline cards and chart series, ready for a
//! client to render. Thin mapping only; all numbers come from the
//! aggregation modules.

use serde::Serialize;

use crate::dashboard::metrics::{MetricsWindow, WindowMetrics};
use crate::dashboard::skills::SkillCount;
use crate::dashboard::trends::TrendPoint;

#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartSeries {
    pub title: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// The four headline cards, taken from the All Time window.
pub fn headline_cards(metrics: &[WindowMetrics]) -> Vec<MetricCard> {
    let Some(all_time) = metrics.iter().find(|m| m.window == MetricsWindow::AllTime) else {
        return Vec::new();
    };

    vec![
        MetricCard {
            label: "Total Resumes",
            value: all_time.total_resumes.to_string(),
        },
        MetricCard {
            label: "Avg ATS Score",
            value: format!("{:.1}", all_time.avg_ats_score),
        },
        MetricCard {
            label: "High Scoring",
            value: all_time.high_scoring.to_string(),
        },
        MetricCard {
            label: "Avg Keyword Score",
            value: format!("{:.1}", all_time.avg_keyword_score),
        },
    ]
}

pub fn skill_chart(skills: &[SkillCount]) -> ChartSeries {
    ChartSeries {
        title: "Top Skills",
        labels: skills.iter().map(|s| s.skill.clone()).collect(),
        values: skills.iter().map(|s| s.count).collect(),
    }
}

pub fn trend_chart(points: &[TrendPoint]) -> ChartSeries {
    ChartSeries {
        title: "Weekly Submissions",
        labels: points.iter().map(|p| p.label.clone()).collect(),
        values: points.iter().map(|p| p.count).collect(),
    }
}
