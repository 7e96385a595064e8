//! Error types for typing-game

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Embedded asset not found: {0}")]
    MissingAsset(String),

    #[error("Embedded asset is not valid UTF-8: {0}")]
    InvalidAsset(String),
}
