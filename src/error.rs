use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Card title must not be empty")]
    EmptyTitle,

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Invalid lane: {0}")]
    InvalidLane(String),

    #[error("Unsupported board file version {0}")]
    UnsupportedVersion(u32),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] figment::Error),
}
