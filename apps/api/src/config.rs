use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Provider credentials are intentionally absent: each /analyze request
/// resolves the selected provider's key at call time, so the server starts
/// with no keys configured and a key is only required when its provider is
/// actually selected.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
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
        })
    }
}
