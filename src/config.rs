use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Duration;

use crate::board::submission::SubmissionLimits;

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret. The .env file is loaded automatically at startup
/// via dotenvy, and CLI flags override the bind address and port.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web server binds to (defaults to 0.0.0.0)
    pub bind: String,
    pub port: u16,
    pub max_post_chars: usize,
    pub max_comment_chars: usize,
    /// Unvoted posts older than this many days are removed by cleanup
    pub retention_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        let limits = SubmissionLimits::default();
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            max_post_chars: limits.max_post_chars,
            max_comment_chars: limits.max_comment_chars,
            retention_days: 3,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; a variable that is set but doesn't parse
    /// is an error rather than silently falling back.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            bind: env::var("RUDESHARE_BIND").unwrap_or(defaults.bind),
            port: parse_var("RUDESHARE_PORT", defaults.port)?,
            max_post_chars: parse_var("RUDESHARE_MAX_POST_CHARS", defaults.max_post_chars)?,
            max_comment_chars: parse_var(
                "RUDESHARE_MAX_COMMENT_CHARS",
                defaults.max_comment_chars,
            )?,
            retention_days: parse_var("RUDESHARE_RETENTION_DAYS", defaults.retention_days)?,
        })
    }

    pub fn limits(&self) -> SubmissionLimits {
        SubmissionLimits {
            max_post_chars: self.max_post_chars,
            max_comment_chars: self.max_comment_chars,
        }
    }

    pub fn retention(&self) -> Duration {
        Duration::days(self.retention_days)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}
