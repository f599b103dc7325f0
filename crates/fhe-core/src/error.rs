//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Value out of range: {0} does not fit in u64")]
    ValueOutOfRange(u128),

    #[error("Invalid ciphertext key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
