use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Both store paths default to files under `data/`, so a bare launch
/// works without any environment set up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the single-file resume store (resumes + analyses).
    pub resume_db_path: String,
    /// Path of the single-file feedback store.
    pub feedback_db_path: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            resume_db_path: env_or("RESUME_DB_PATH", "data/resumes.db"),
            feedback_db_path: env_or("FEEDBACK_DB_PATH", "data/feedback.db"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
