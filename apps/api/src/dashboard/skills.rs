//! Skill Histogram — ranks the most frequent skill tokens across all resumes.
//!
//! The skills column is a comma-delimited string; tokenization happens here
//! in plain Rust rather than in a recursive SQL split, so the contract is
//! visible and unit-testable.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::SqlitePool;

/// How many skills the dashboard bar chart shows.
pub const TOP_SKILLS_LIMIT: usize = 10;

#[derive(Debug, Clone, Serialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: i64,
}

/// Splits one skills field into its non-empty comma-separated tokens.
/// Tokens are counted verbatim; no trimming or case folding.
pub fn split_skills(field: &str) -> impl Iterator<Item = &str> {
    field.split(',').filter(|token| !token.is_empty())
}

/// Counts tokens across all fields and returns the `limit` most frequent,
/// descending by count. Ties rank in an arbitrary order; no secondary sort
/// key is defined.
pub fn skill_histogram<'a, I>(fields: I, limit: usize) -> Vec<SkillCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for field in fields {
        for token in split_skills(field) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

/// Loads every skills field from the store and ranks the top `limit` tokens.
pub async fn top_skills(pool: &SqlitePool, limit: usize) -> Result<Vec<SkillCount>, sqlx::Error> {
    let fields: Vec<String> = sqlx::query_scalar("SELECT skills FROM resumes")
        .fetch_all(pool)
        .await?;

    Ok(skill_histogram(fields.iter().map(String::as_str), limit))
}
