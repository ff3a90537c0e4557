use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum VeilleError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parsing error: {0}")]
    FeedParse(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    MailBuild(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    MailSend(#[from] lettre::transport::smtp::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VeilleError>;
