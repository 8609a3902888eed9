use std::collections::BTreeMap;
use std::sync::RwLock;

use mda_address::MetadataAddress;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::page::{Page, PageRequest, PageResponse};
use crate::traits::MetadataStore;

/// In-memory, `BTreeMap`-based metadata store.
///
/// Keys are the raw address bytes, so map order is the byte order that
/// prefix scans rely on. Entries are held behind a `RwLock` and cloned on
/// read.
pub struct InMemoryMetadataStore {
    entries: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
}

impl InMemoryMetadataStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }

    /// All stored addresses in key order.
    pub fn addresses(&self) -> Vec<MetadataAddress> {
        self.entries
            .read()
            .expect("lock poisoned")
            .keys()
            .map(|k| MetadataAddress::from_raw(k.clone()))
            .collect()
    }
}

impl Default for InMemoryMetadataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for InMemoryMetadataStore {
    fn get(&self, key: &MetadataAddress) -> StoreResult<Option<Vec<u8>>> {
        let map = self.entries.read().expect("lock poisoned");
        Ok(map.get(key.as_bytes()).cloned())
    }

    fn put(&self, key: &MetadataAddress, value: Vec<u8>) -> StoreResult<()> {
        if let Err(e) = key.validate() {
            debug!(key = %key.debug_hex(), error = %e, "rejecting store key");
            return Err(StoreError::InvalidKey(e));
        }
        let mut map = self.entries.write().expect("lock poisoned");
        map.insert(key.as_bytes().to_vec(), value);
        debug!(key = %key, "stored entry");
        Ok(())
    }

    fn delete(&self, key: &MetadataAddress) -> StoreResult<bool> {
        let mut map = self.entries.write().expect("lock poisoned");
        let removed = map.remove(key.as_bytes()).is_some();
        if removed {
            debug!(key = %key, "deleted entry");
        }
        Ok(removed)
    }

    fn iterate_prefix(
        &self,
        prefix: &[u8],
        page: &PageRequest,
    ) -> StoreResult<Page<(MetadataAddress, Vec<u8>)>> {
        let map = self.entries.read().expect("lock poisoned");
        let limit = page.effective_limit();

        let start = match &page.key {
            Some(key) if key.as_slice() > prefix => key.clone(),
            _ => prefix.to_vec(),
        };

        let mut items = Vec::new();
        let mut next_key = None;
        for (key, value) in map.range(start..).take_while(|(k, _)| k.starts_with(prefix)) {
            if items.len() == limit {
                next_key = Some(key.clone());
                break;
            }
            items.push((MetadataAddress::from_raw(key.clone()), value.clone()));
        }

        let total = map
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .count() as u64;

        Ok(Page {
            items,
            response: PageResponse { next_key, total },
        })
    }
}

impl std::fmt::Debug for InMemoryMetadataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryMetadataStore")
            .field("entry_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mda_address::AddressError;
    use uuid::Uuid;

    fn scope_a() -> Uuid {
        Uuid::parse_str("91978ba2-5f35-459a-86a7-feca1b0512e0").unwrap()
    }

    fn scope_b() -> Uuid {
        Uuid::parse_str("5803f8bc-6067-4eb5-951f-2121671c2ec0").unwrap()
    }

    // -----------------------------------------------------------------------
    // Core CRUD
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get() {
        let store = InMemoryMetadataStore::new();
        let key = MetadataAddress::scope(scope_a());
        store.put(&key, b"scope-a".to_vec()).unwrap();
        assert_eq!(store.get(&key).unwrap(), Some(b"scope-a".to_vec()));
        assert!(store.contains(&key).unwrap());
    }

    #[test]
    fn put_overwrites() {
        let store = InMemoryMetadataStore::new();
        let key = MetadataAddress::scope(scope_a());
        store.put(&key, b"one".to_vec()).unwrap();
        store.put(&key, b"two".to_vec()).unwrap();
        assert_eq!(store.get(&key).unwrap(), Some(b"two".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryMetadataStore::new();
        let key = MetadataAddress::scope(scope_a());
        assert!(store.get(&key).unwrap().is_none());
        assert!(!store.contains(&key).unwrap());
    }

    #[test]
    fn delete_entry() {
        let store = InMemoryMetadataStore::new();
        let key = MetadataAddress::contract_spec(scope_a());
        store.put(&key, vec![1]).unwrap();
        assert!(store.delete(&key).unwrap());
        assert!(!store.delete(&key).unwrap());
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Key validation
    // -----------------------------------------------------------------------

    #[test]
    fn put_rejects_invalid_keys() {
        let store = InMemoryMetadataStore::new();
        let empty = MetadataAddress::empty();
        assert!(matches!(
            store.put(&empty, vec![]),
            Err(StoreError::InvalidKey(AddressError::Empty))
        ));

        let mut bytes = MetadataAddress::scope(scope_a()).into_bytes();
        bytes.push(0);
        let long = MetadataAddress::from_raw(bytes);
        assert!(matches!(
            store.put(&long, vec![]),
            Err(StoreError::InvalidKey(AddressError::LengthMismatch { .. }))
        ));
        assert!(store.is_empty());
    }

    // -----------------------------------------------------------------------
    // Prefix iteration
    // -----------------------------------------------------------------------

    fn populated() -> InMemoryMetadataStore {
        let store = InMemoryMetadataStore::new();
        for scope in [scope_a(), scope_b()] {
            let addr = MetadataAddress::scope(scope);
            store.put(&addr, vec![]).unwrap();
            for n in 0..3u8 {
                let session = addr.as_session(Uuid::from_bytes([n; 16])).unwrap();
                store.put(&session, vec![n]).unwrap();
            }
            store.put(&addr.as_record("loan").unwrap(), vec![]).unwrap();
        }
        store
    }

    #[test]
    fn iterate_prefix_returns_only_matching_keys_in_order() {
        let store = populated();
        let prefix = MetadataAddress::scope(scope_a())
            .scope_sessions_prefix()
            .unwrap();
        let page = store.iterate_prefix(&prefix, &PageRequest::default()).unwrap();
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.response.total, 3);
        assert!(page.response.next_key.is_none());
        for w in page.items.windows(2) {
            assert!(w[0].0 < w[1].0);
        }
        for (addr, _) in &page.items {
            assert!(addr.is_session());
            assert_eq!(addr.scope_uuid().unwrap(), scope_a());
        }
    }

    #[test]
    fn iterate_whole_kind() {
        let store = populated();
        let page = store
            .iterate_prefix(&[0x01], &PageRequest::default())
            .unwrap();
        assert_eq!(page.items.len(), 6);
    }

    #[test]
    fn paging_resumes_at_next_key() {
        let store = populated();
        let prefix = [0x01];
        let first = store.iterate_prefix(&prefix, &PageRequest::new(4)).unwrap();
        assert_eq!(first.items.len(), 4);
        assert_eq!(first.response.total, 6);
        let next = first.response.next_key.clone().expect("more entries");

        let second = store
            .iterate_prefix(&prefix, &PageRequest::resume(next.clone(), 4))
            .unwrap();
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.items[0].0.as_bytes(), next.as_slice());
        assert!(second.response.next_key.is_none());
    }

    #[test]
    fn empty_prefix_scans_everything() {
        let store = populated();
        let page = store.iterate_prefix(&[], &PageRequest::default()).unwrap();
        assert_eq!(page.items.len(), store.len());
    }

    #[test]
    fn addresses_are_sorted() {
        let store = populated();
        let addrs = store.addresses();
        assert_eq!(addrs.len(), 10);
        for w in addrs.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(populated());
        let key = MetadataAddress::scope(scope_a());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let key = key.clone();
                thread::spawn(move || {
                    assert!(store.get(&key).unwrap().is_some());
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn debug_format() {
        let store = populated();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryMetadataStore"));
        assert!(debug.contains("entry_count"));
    }
}
