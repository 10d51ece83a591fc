use anyhow::{Context, Result};
use std::time::Duration;

/// Discord rejects messages longer than this many characters.
pub const DISCORD_MESSAGE_LIMIT: usize = 2000;

#[derive(Debug, Clone)]
pub struct Config {
    // Discord
    /// Bot token. When absent the dashboard still runs but the bot never starts.
    pub discord_token: Option<String>,

    // Dashboard
    pub host: String,
    pub port: u16,

    // Translation provider
    pub translate_api_url: String,
    pub translate_timeout: Duration,

    // Delivery
    pub max_message_length: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            discord_token: std::env::var("DISCORD_TOKEN")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),

            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().context(format!("PORT must be a number, got '{}'", v))?,
                Err(_) => 5000,
            },

            translate_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| "https://translate.googleapis.com".to_string()),
            translate_timeout: Duration::from_secs(
                std::env::var("TRANSLATE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            ),

            max_message_length: std::env::var("MAX_MESSAGE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n: &usize| n >= 1)
                .unwrap_or(DISCORD_MESSAGE_LIMIT),
        };

        Ok(config)
    }

    /// Address the dashboard listens on, e.g. `0.0.0.0:5000`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
