//! Ownership links between external accounts and metadata addresses.
//!
//! An [`AccMdLinks`] list is built transiently by a caller to describe
//! which accounts own which scopes. It is validated with
//! [`AccMdLinks::validate_for_scopes`] and then projected into accounts,
//! UUID strings, or the addresses of a single account.

pub mod error;
pub mod links;

pub use error::{LinkError, Result};
pub use links::{AccMdLink, AccMdLinks};
