//! Ordered storage for metadata addresses.
//!
//! Addresses are stored under their raw bytes so that the children of a
//! scope or contract specification form one contiguous key range. The
//! scan prefixes computed by `mda-address` select those ranges.
//!
//! # Storage Backends
//!
//! All backends implement the [`MetadataStore`] trait:
//!
//! - [`InMemoryMetadataStore`] -- `BTreeMap`-based store for tests and the CLI

pub mod error;
pub mod memory;
pub mod page;
pub mod query;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryMetadataStore;
pub use page::{Page, PageRequest, PageResponse, DEFAULT_PAGE_LIMIT};
pub use query::{record_specs_in_contract_spec, records_in_scope, sessions_in_scope};
pub use traits::MetadataStore;
