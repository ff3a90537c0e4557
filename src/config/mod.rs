//! Configuration loading.
//!
//! The configuration is a TOML file whose path is passed explicitly on the
//! command line; nothing is read from the working directory or the
//! environment. Missing optional fields fall back to defaults.
//!
//! ```toml
//! rss_feeds = ["https://example.com/feed.xml"]
//! hours_window = 24
//! email_subject = "Veille emploi"
//!
//! [email]
//! from = "bot@example.com"
//! to = ["you@example.com"]
//!
//! [email.smtp]
//! host = "smtp.example.com"
//! port = 587
//! username = "bot@example.com"
//! password = "app-password"
//! use_tls = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_HOURS_WINDOW: i64 = 24;
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_SUBJECT: &str = "Veille emploi";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration struct.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Feed URLs, fetched sequentially in this order.
    pub rss_feeds: Vec<String>,

    /// Trailing window in hours; entries older than this are dropped.
    #[serde(default = "default_hours_window")]
    pub hours_window: i64,

    /// Subject line of the digest email.
    #[serde(default = "default_subject")]
    pub email_subject: String,

    pub email: EmailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Sender address; defaults to the SMTP username when unset.
    #[serde(default)]
    pub from: Option<String>,

    /// Recipient addresses, all on one message.
    pub to: Vec<String>,

    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,

    #[serde(default = "default_smtp_port")]
    pub port: u16,

    pub username: String,
    pub password: String,

    /// Negotiate STARTTLS before authenticating.
    #[serde(default = "default_true")]
    pub use_tls: bool,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> crate::app::Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks the loader cannot express: non-empty lists, sane window,
    /// absolute http(s) feed URLs.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.rss_feeds.is_empty() {
            return Err(ConfigError::Invalid("rss_feeds is empty".into()));
        }

        for url in &self.rss_feeds {
            let parsed = Url::parse(url)
                .map_err(|e| ConfigError::Invalid(format!("feed URL {url}: {e}")))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(ConfigError::Invalid(format!(
                    "feed URL {url}: unsupported scheme {}",
                    parsed.scheme()
                )));
            }
        }

        if self.hours_window < 0 {
            return Err(ConfigError::Invalid(format!(
                "hours_window must be non-negative, got {}",
                self.hours_window
            )));
        }

        if self.email.to.is_empty() {
            return Err(ConfigError::Invalid("email.to is empty".into()));
        }

        Ok(())
    }
}

impl EmailConfig {
    pub fn sender(&self) -> &str {
        self.from.as_deref().unwrap_or(&self.smtp.username)
    }
}

fn default_hours_window() -> i64 {
    DEFAULT_HOURS_WINDOW
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_subject() -> String {
    DEFAULT_SUBJECT.to_string()
}

fn default_true() -> bool {
    true
}
