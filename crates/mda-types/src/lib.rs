//! Identity primitives for metadata addresses.
//!
//! This crate provides the small value types that every metadata address is
//! built from. The address codec (`mda-address`) and the ownership links
//! (`mda-links`) both depend on it.
//!
//! # Key Types
//!
//! - [`Uuid`] -- 16-byte identity, re-exported from the `uuid` crate
//! - [`NameHash`] -- truncated SHA-256 of a normalized name
//! - [`AccountId`] -- opaque account identifier rendered as bech32
//! - [`text`] -- bech32 (HRP + checksum) helpers shared by the other crates

pub mod account;
pub mod error;
pub mod name;
pub mod text;

pub use account::{AccountId, DEFAULT_ACCOUNT_HRP};
pub use error::TypeError;
pub use name::{normalize_name, NameHash, NAME_HASH_LEN};
pub use uuid::Uuid;

/// Size in bytes of a UUID slot inside an address.
pub const UUID_LEN: usize = 16;
