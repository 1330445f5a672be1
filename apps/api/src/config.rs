use anyhow::{Context, Result};

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/aijobmatcher";
const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub mongodb_uri: String,
    pub port: u16,
}

impl Config {
    /// Reads the process environment. `.env` is loaded by `main` beforehand.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            mongodb_uri: lookup("MONGODB_URI")
                .filter(|uri| !uri.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MONGODB_URI.to_string()),
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
