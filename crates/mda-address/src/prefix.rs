//! Scan prefixes for ordered range iteration.
//!
//! Because addresses are stored under their raw bytes, all children of one
//! parent share a common key prefix: the child's tag byte followed by the
//! parent's 16-byte UUID. These functions only compute that prefix; the
//! ordered store is responsible for iterating keys in byte order.

use mda_types::Uuid;

use crate::address::MetadataAddress;
use crate::error::Result;
use crate::kind::AddressKind;

/// Prefix matching every address of a kind: just its tag byte.
pub fn kind_prefix(kind: AddressKind) -> Vec<u8> {
    vec![kind.tag()]
}

fn child_prefix(kind: AddressKind, parent: Uuid) -> Vec<u8> {
    let mut prefix = Vec::with_capacity(1 + 16);
    prefix.push(kind.tag());
    prefix.extend_from_slice(parent.as_bytes());
    prefix
}

impl MetadataAddress {
    /// Prefix for the sessions of this address's scope.
    ///
    /// The empty address yields the prefix of all sessions; scope, session,
    /// and record addresses yield the sessions of their scope.
    pub fn scope_sessions_prefix(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Ok(kind_prefix(AddressKind::Session));
        }
        let scope = self.scope_uuid()?;
        Ok(child_prefix(AddressKind::Session, scope))
    }

    /// Prefix for the records of this address's scope.
    pub fn scope_records_prefix(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Ok(kind_prefix(AddressKind::Record));
        }
        let scope = self.scope_uuid()?;
        Ok(child_prefix(AddressKind::Record, scope))
    }

    /// Prefix for the record specifications of this address's contract
    /// specification.
    pub fn contract_spec_record_specs_prefix(&self) -> Result<Vec<u8>> {
        if self.is_empty() {
            return Ok(kind_prefix(AddressKind::RecordSpecification));
        }
        let contract_spec = self.contract_spec_uuid()?;
        Ok(child_prefix(AddressKind::RecordSpecification, contract_spec))
    }
}
