use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Timed out after {timeout:?} waiting for {what}")]
    Timeout { what: String, timeout: Duration },
    #[error("Discord API returned {status}: {body}")]
    Discord { status: u16, body: String },
    #[error("Unknown time zone: {0}")]
    TimeZone(String),
}

impl From<chromiumoxide::error::CdpError> for BotError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        BotError::Browser(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
