use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Only reachable if an amount's text is refused as a JSON number.
    #[error("failed to encode expenses: {0}")]
    Encode(#[source] serde_json::Error),
    /// Not a number, or outside the decimal range (magnitude up to about
    /// 7.9e28, at most 28 fractional digits).
    #[error("invalid amount '{0}', must be a valid number")]
    InvalidAmount(String),
}
