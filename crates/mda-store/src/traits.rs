use mda_address::MetadataAddress;

use crate::error::StoreResult;
use crate::page::{Page, PageRequest};

/// Ordered key-value store keyed by metadata address bytes.
///
/// Keys are iterated in lexicographic byte order, so every child of a scope
/// or contract specification is reachable with a single prefix scan.
pub trait MetadataStore: Send + Sync {
    /// Read the value stored under an address. Returns `Ok(None)` if absent.
    fn get(&self, key: &MetadataAddress) -> StoreResult<Option<Vec<u8>>>;

    /// Store a value, replacing any previous one.
    ///
    /// Keys must be valid metadata addresses.
    fn put(&self, key: &MetadataAddress, value: Vec<u8>) -> StoreResult<()>;

    /// Remove an address. Returns `true` if it was present.
    fn delete(&self, key: &MetadataAddress) -> StoreResult<bool>;

    /// Entries whose key starts with `prefix`, in key order.
    fn iterate_prefix(
        &self,
        prefix: &[u8],
        page: &PageRequest,
    ) -> StoreResult<Page<(MetadataAddress, Vec<u8>)>>;

    /// Check whether an address is present.
    fn contains(&self, key: &MetadataAddress) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}
