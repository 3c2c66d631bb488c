use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("github error: {0}")]
    GitHub(#[from] octocrab::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

pub type Result<T> = std::result::Result<T, FolioError>;
