//! Error types for address operations.

use thiserror::Error;

use crate::kind::AddressKind;

/// Errors produced while building, parsing, or deriving metadata addresses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The address has no bytes.
    #[error("address is empty")]
    Empty,

    /// A text or hex input was blank.
    #[error("empty address string is not allowed")]
    EmptyInput,

    /// The tag byte is not one of the known kinds.
    #[error("invalid metadata address type: {0}")]
    UnknownType(u8),

    /// The byte length does not fit the kind (or the slice being read).
    #[error("incorrect address length (expected: {expected}, actual: {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    /// A 16-byte slot could not be read as a UUID.
    #[error("invalid address bytes of {slot} uuid, expected uuid compliant: {reason}")]
    MalformedUuid { slot: &'static str, reason: String },

    /// A caller-supplied argument was unusable (e.g. a blank name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Text, hex, or base64 decoding failed.
    #[error("decode error: {0}")]
    Decode(String),

    /// The bech32 prefix disagrees with the kind encoded in the bytes.
    #[error("invalid bech32 prefix; expected {expected}, got {actual}")]
    PrefixMismatch { expected: String, actual: String },

    /// The address kind does not carry the requested component.
    #[error("this metadata address ({address}) does not contain a {component}")]
    WrongType {
        address: String,
        component: &'static str,
    },

    /// The address is valid but of a different kind than required.
    #[error("invalid {} id {address:?}: wrong type ({actual})", .expected.formal_name())]
    UnexpectedKind {
        expected: AddressKind,
        actual: AddressKind,
        address: String,
    },

    /// The address failed validation while a specific kind was required.
    #[error("invalid {} metadata address {address}: {source}", .expected.formal_name())]
    Invalid {
        expected: AddressKind,
        address: String,
        #[source]
        source: Box<AddressError>,
    },

    /// A denom string lacks the metadata denom prefix.
    #[error("denom {0:?} is not a metadata address denom")]
    NotADenom(String),

    /// The denom prefix was present but the rest did not decode.
    #[error("invalid metadata address in denom {denom:?}: {source}")]
    InvalidDenom {
        denom: String,
        #[source]
        source: Box<AddressError>,
    },
}

/// Convenience type alias for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;
