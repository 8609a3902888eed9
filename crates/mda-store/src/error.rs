use mda_address::AddressError;

/// Errors from metadata store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A key passed to `put` is not a valid metadata address.
    #[error("invalid metadata address key: {0}")]
    InvalidKey(#[source] AddressError),

    /// A scan prefix could not be derived from the given address.
    #[error("cannot derive scan prefix: {0}")]
    Prefix(#[from] AddressError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
