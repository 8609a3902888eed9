//! Error types for ownership-link validation.

use mda_address::AddressError;
use thiserror::Error;

/// Reasons a list of ownership links is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// An entry in the list is absent.
    #[error("nil entry not allowed (index {index})")]
    NilEntry { index: usize },

    /// The same metadata address appears more than once.
    #[error("duplicate metadata address {address:?} not allowed")]
    DuplicateAddress { address: String },

    /// A metadata address is not a valid scope address.
    #[error(transparent)]
    NotAScopeAddress(AddressError),

    /// A link has an empty account identifier.
    #[error("no account address associated with metadata address {address:?}")]
    MissingAccount { address: String },
}

/// Convenience type alias for link operations.
pub type Result<T> = std::result::Result<T, LinkError>;
