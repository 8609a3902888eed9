use thiserror::Error;

/// Errors produced by identity primitive operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid byte length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("name is empty after normalization")]
    EmptyName,

    #[error("invalid bech32 string: {0}")]
    InvalidBech32(String),

    #[error("invalid bech32 prefix; expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },
}
