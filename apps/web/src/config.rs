use anyhow::{Context, Result};
use chrono::TimeDelta;

/// One year.
const MAX_SESSION_IDLE_MINUTES: i64 = 525_600;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the NextHire backend, without the trailing slash.
    pub backend_url: String,
    pub port: u16,
    pub rust_log: String,
    /// How long a page session survives without events.
    pub session_idle: TimeDelta,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            backend_url: require_env("BACKEND_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session_idle: parse_idle_minutes(
                &std::env::var("SESSION_IDLE_MINUTES").unwrap_or_else(|_| "30".to_string()),
            )?,
        })
    }
}

fn parse_idle_minutes(raw: &str) -> Result<TimeDelta> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|m| (1..=MAX_SESSION_IDLE_MINUTES).contains(m))
        .and_then(TimeDelta::try_minutes)
        .with_context(|| {
            format!("SESSION_IDLE_MINUTES must be between 1 and {MAX_SESSION_IDLE_MINUTES} minutes, got '{raw}'")
        })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
