use anyhow::{bail, Context, Result};

use crate::screening::{THRESHOLD_MAX, THRESHOLD_MIN};

/// Application configuration loaded from environment variables.
/// All variables have defaults, so a bare `cargo run` works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Minimum score a résumé needs to be reported as approved when the
    /// request does not supply its own threshold.
    pub default_threshold: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_threshold = std::env::var("DEFAULT_THRESHOLD")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<u32>()
            .context("DEFAULT_THRESHOLD must be an integer")?;
        if !(THRESHOLD_MIN..=THRESHOLD_MAX).contains(&default_threshold) {
            bail!("DEFAULT_THRESHOLD must be between {THRESHOLD_MIN} and {THRESHOLD_MAX}");
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_threshold,
        })
    }
}
