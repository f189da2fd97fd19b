use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the local device storage file.
    pub storage_dir: PathBuf,
    /// Simulated latency of the summary/bullet enhancer and the chatbot.
    pub assist_delay: Duration,
    /// Simulated latency of cover letter generation.
    pub cover_letter_delay: Duration,
    /// Simulated latency of login/register/profile submissions.
    pub auth_delay: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            storage_dir: std::env::var("STORAGE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".resumeai")),
            assist_delay: delay_from_env("ASSIST_DELAY_MS", 1000)?,
            cover_letter_delay: delay_from_env("COVER_LETTER_DELAY_MS", 2000)?,
            auth_delay: delay_from_env("AUTH_DELAY_MS", 1000)?,
        })
    }
}

fn delay_from_env(key: &str, default_ms: u64) -> Result<Duration> {
    let millis = match std::env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a whole number of milliseconds"))?,
        Err(_) => default_ms,
    };
    Ok(Duration::from_millis(millis))
}

#[cfg(test)]
impl Config {
    /// Zero-delay configuration rooted at `storage_dir`, for router tests.
    pub fn for_tests(storage_dir: PathBuf) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            storage_dir,
            assist_delay: Duration::ZERO,
            cover_letter_delay: Duration::ZERO,
            auth_delay: Duration::ZERO,
        }
    }
}
