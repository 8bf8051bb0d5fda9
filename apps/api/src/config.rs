use thiserror::Error;

/// Environment variable holding the completion-service credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    MissingVar(&'static str),

    #[error("Environment variable '{var}' is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Application configuration loaded from environment variables.
/// Startup aborts if the API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup(API_KEY_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingVar(API_KEY_VAR))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                reason: e.to_string(),
            })?,
            None => 8080,
        };

        Ok(Config {
            openai_api_key,
            port,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
