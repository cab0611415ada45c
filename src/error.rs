use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildStatsError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, BuildStatsError>;

/// Failure to read a build-server timestamp.
///
/// Only ever observed by callers of `parse_instant`; the duration and date
/// helpers fold it into their placeholder values.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TimestampError {
    #[error("timestamp is missing")]
    Missing,

    #[error("malformed timestamp '{0}'")]
    Malformed(String),
}
