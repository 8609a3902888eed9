//! Typed, hierarchical metadata addresses.
//!
//! A metadata address identifies one entity in the scope / session / record
//! graph and its specifications. It is a tag byte followed by one or two
//! 16-byte slots (UUIDs or a name hash), and is used verbatim as a key in an
//! ordered store. Its human-readable form is bech32, with the prefix chosen
//! by the tag.
//!
//! # Layout
//!
//! | Kind | Tag | Bytes | Prefix |
//! |---|---|---|---|
//! | Scope | `0x00` | tag + scope UUID | `scope` |
//! | Session | `0x01` | tag + scope UUID + session UUID | `session` |
//! | Record | `0x02` | tag + scope UUID + name hash | `record` |
//! | Contract specification | `0x03` | tag + spec UUID | `contractspec` |
//! | Scope specification | `0x04` | tag + spec UUID | `scopespec` |
//! | Record specification | `0x05` | tag + contract spec UUID + name hash | `recspec` |
//!
//! # Modules
//!
//! - [`kind`] -- the closed kind table
//! - [`address`] -- [`MetadataAddress`] and validation
//! - [`id`] -- [`MetadataId`], the typed view
//! - [`text`] -- bech32, hex, hash, and denom conversions
//! - [`derive`] -- parent and child address derivation
//! - [`prefix`] -- scan prefixes for range iteration
//! - [`details`] -- [`AddressDetails`] for diagnostics
//!
//! Everything here is a pure function over immutable bytes.

pub mod address;
pub mod derive;
pub mod details;
pub mod error;
pub mod id;
pub mod kind;
pub mod prefix;
pub mod text;

#[cfg(feature = "serde")]
mod serde_impl;

pub use address::{validate_bytes, MetadataAddress};
pub use details::AddressDetails;
pub use error::{AddressError, Result};
pub use id::MetadataId;
pub use kind::{AddressKind, SecondSlot, LONG_ADDRESS_LEN, SHORT_ADDRESS_LEN};
pub use prefix::kind_prefix;
pub use text::DENOM_PREFIX;
