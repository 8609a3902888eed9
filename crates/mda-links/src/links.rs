use std::collections::HashSet;
use std::fmt;

use mda_address::MetadataAddress;
use mda_types::AccountId;
use tracing::debug;

use crate::error::{LinkError, Result};

const NIL_STR: &str = "<nil>";
const EMPTY_STR: &str = "<empty>";

/// Associates an account with a metadata address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccMdLink {
    pub account: AccountId,
    pub address: MetadataAddress,
}

impl AccMdLink {
    pub fn new(account: AccountId, address: MetadataAddress) -> Self {
        Self { account, address }
    }
}

/// Renders as `<account>:<address>`, with `<empty>` for empty components.
impl fmt::Display for AccMdLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let account = if self.account.is_empty() {
            EMPTY_STR.to_string()
        } else {
            self.account.to_string()
        };
        let address = if self.address.is_empty() {
            EMPTY_STR.to_string()
        } else {
            self.address.to_string()
        };
        write!(f, "{account}:{address}")
    }
}

/// An ordered list of ownership links.
///
/// Entries are optional so that an absent entry can be represented and
/// rejected by validation. Order is preserved for output only; lookups do
/// not depend on it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccMdLinks(Vec<Option<AccMdLink>>);

impl AccMdLinks {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, link: AccMdLink) {
        self.0.push(Some(link));
    }

    /// Append an absent entry.
    pub fn push_nil(&mut self) {
        self.0.push(None);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&AccMdLink>> {
        self.0.iter().map(Option::as_ref)
    }

    /// Check the list as a set of account-to-scope associations.
    ///
    /// An empty list is valid. Entries are checked in order and the first
    /// failure is returned: absent entries, repeated addresses, addresses
    /// that are not scopes, and links without an account are all rejected.
    pub fn validate_for_scopes(&self) -> Result<()> {
        let mut seen: HashSet<&[u8]> = HashSet::with_capacity(self.0.len());
        for (index, entry) in self.0.iter().enumerate() {
            let link = entry.as_ref().ok_or(LinkError::NilEntry { index })?;

            if !seen.insert(link.address.as_bytes()) {
                debug!(index, address = %link.address, "duplicate link address");
                return Err(LinkError::DuplicateAddress {
                    address: link.address.to_string(),
                });
            }
            link.address
                .validate_is_scope()
                .map_err(LinkError::NotAScopeAddress)?;

            if link.account.is_empty() {
                return Err(LinkError::MissingAccount {
                    address: link.address.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Distinct accounts in first-seen order. Absent entries and empty
    /// accounts are skipped.
    pub fn accounts(&self) -> Vec<AccountId> {
        let mut seen: HashSet<&[u8]> = HashSet::new();
        self.0
            .iter()
            .flatten()
            .filter(|link| !link.account.is_empty())
            .filter(|link| seen.insert(link.account.as_bytes()))
            .map(|link| link.account.clone())
            .collect()
    }

    /// The primary UUID of each entry's address as a string, positionally.
    ///
    /// Absent entries, empty addresses, and addresses without a readable
    /// primary UUID map to `""`, so the output always has one element per
    /// entry.
    pub fn primary_uuids(&self) -> Vec<String> {
        self.0
            .iter()
            .map(|entry| {
                entry
                    .as_ref()
                    .filter(|link| !link.address.is_empty())
                    .and_then(|link| link.address.primary_uuid().ok())
                    .map(|id| id.to_string())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Every address linked to the account whose text form is `account`.
    pub fn addresses_for_account(&self, account: &str) -> Vec<MetadataAddress> {
        self.0
            .iter()
            .flatten()
            .filter(|link| link.account.to_string() == account)
            .map(|link| link.address.clone())
            .collect()
    }
}

impl From<Vec<Option<AccMdLink>>> for AccMdLinks {
    fn from(entries: Vec<Option<AccMdLink>>) -> Self {
        Self(entries)
    }
}

impl From<Vec<AccMdLink>> for AccMdLinks {
    fn from(links: Vec<AccMdLink>) -> Self {
        links.into_iter().collect()
    }
}

impl FromIterator<AccMdLink> for AccMdLinks {
    fn from_iter<I: IntoIterator<Item = AccMdLink>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<AccMdLink>> for AccMdLinks {
    fn from_iter<I: IntoIterator<Item = Option<AccMdLink>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders as `[a, b, ...]`, or `<empty>` for an empty list.
impl fmt::Display for AccMdLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str(EMPTY_STR);
        }
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|entry| match entry {
                Some(link) => link.to_string(),
                None => NIL_STR.to_string(),
            })
            .collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
