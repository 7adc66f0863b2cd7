use anyhow::{Context, Result};

use crate::annotate::DEFAULT_MAX_TEXT_LEN;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Language code for the annotator's stopword list.
    pub stopword_lang: String,
    /// Maximum annotator input, in characters.
    pub max_text_len: usize,
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
            stopword_lang: std::env::var("STOPWORD_LANG").unwrap_or_else(|_| "en".to_string()),
            max_text_len: std::env::var("MAX_TEXT_LEN")
                .unwrap_or_else(|_| DEFAULT_MAX_TEXT_LEN.to_string())
                .parse::<usize>()
                .context("MAX_TEXT_LEN must be a positive integer")?,
        })
    }
}
