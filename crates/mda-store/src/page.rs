/// Page size used when a request asks for zero entries.
pub const DEFAULT_PAGE_LIMIT: usize = 100;

/// Where a prefix scan starts and how much it returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// Resume from this key (inclusive), usually a previous `next_key`.
    pub key: Option<Vec<u8>>,
    /// Maximum entries to return. Zero means [`DEFAULT_PAGE_LIMIT`].
    pub limit: usize,
}

impl PageRequest {
    pub fn new(limit: usize) -> Self {
        Self { key: None, limit }
    }

    /// Continue a scan from the `next_key` of an earlier response.
    pub fn resume(key: Vec<u8>, limit: usize) -> Self {
        Self {
            key: Some(key),
            limit,
        }
    }

    pub fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            self.limit
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LIMIT)
    }
}

/// Pagination state returned alongside a page of results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageResponse {
    /// First key not returned, or `None` when the scan is exhausted.
    pub next_key: Option<Vec<u8>>,
    /// Number of keys under the prefix, regardless of paging.
    pub total: u64,
}

/// One page of scan results.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub response: PageResponse,
}

impl<T> Page<T> {
    /// Transform the items, keeping the pagination state.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            response: self.response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_limit_uses_default() {
        assert_eq!(PageRequest::new(0).effective_limit(), DEFAULT_PAGE_LIMIT);
        assert_eq!(PageRequest::new(3).effective_limit(), 3);
        assert_eq!(PageRequest::default().limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn map_keeps_response() {
        let page = Page {
            items: vec![1, 2],
            response: PageResponse {
                next_key: Some(vec![9]),
                total: 5,
            },
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.items, vec![10, 20]);
        assert_eq!(mapped.response.total, 5);
        assert_eq!(mapped.response.next_key, Some(vec![9]));
    }
}
