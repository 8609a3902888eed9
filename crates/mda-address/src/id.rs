//! Typed view of a well-formed metadata address.

use mda_types::{NameHash, Uuid};

use crate::address::{validate_bytes, MetadataAddress};
use crate::error::{AddressError, Result};
use crate::kind::AddressKind;

/// A decoded metadata address: one variant per kind, holding its identity.
///
/// Converting to a [`MetadataAddress`] always yields a valid address, and
/// converting back succeeds for every address that passes validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetadataId {
    Scope { scope: Uuid },
    Session { scope: Uuid, session: Uuid },
    Record { scope: Uuid, name: NameHash },
    ContractSpecification { contract_spec: Uuid },
    ScopeSpecification { scope_spec: Uuid },
    RecordSpecification { contract_spec: Uuid, name: NameHash },
}

fn hash_name(name: &str, what: &str) -> Result<NameHash> {
    NameHash::of(name)
        .map_err(|_| AddressError::InvalidInput(format!("missing name value for {what} metadata address")))
}

impl MetadataId {
    pub fn scope(scope: Uuid) -> Self {
        MetadataId::Scope { scope }
    }

    pub fn session(scope: Uuid, session: Uuid) -> Self {
        MetadataId::Session { scope, session }
    }

    /// A record within a scope, identified by name. Fails on a blank name.
    pub fn record(scope: Uuid, name: &str) -> Result<Self> {
        Ok(MetadataId::Record {
            scope,
            name: hash_name(name, "record")?,
        })
    }

    pub fn contract_spec(contract_spec: Uuid) -> Self {
        MetadataId::ContractSpecification { contract_spec }
    }

    pub fn scope_spec(scope_spec: Uuid) -> Self {
        MetadataId::ScopeSpecification { scope_spec }
    }

    /// A record specification within a contract specification. Fails on a
    /// blank name.
    pub fn record_spec(contract_spec: Uuid, name: &str) -> Result<Self> {
        Ok(MetadataId::RecordSpecification {
            contract_spec,
            name: hash_name(name, "record spec")?,
        })
    }

    pub fn kind(&self) -> AddressKind {
        match self {
            MetadataId::Scope { .. } => AddressKind::Scope,
            MetadataId::Session { .. } => AddressKind::Session,
            MetadataId::Record { .. } => AddressKind::Record,
            MetadataId::ContractSpecification { .. } => AddressKind::ContractSpecification,
            MetadataId::ScopeSpecification { .. } => AddressKind::ScopeSpecification,
            MetadataId::RecordSpecification { .. } => AddressKind::RecordSpecification,
        }
    }

    /// The UUID in the first slot.
    pub fn primary_uuid(&self) -> Uuid {
        match *self {
            MetadataId::Scope { scope }
            | MetadataId::Session { scope, .. }
            | MetadataId::Record { scope, .. } => scope,
            MetadataId::ContractSpecification { contract_spec }
            | MetadataId::RecordSpecification { contract_spec, .. } => contract_spec,
            MetadataId::ScopeSpecification { scope_spec } => scope_spec,
        }
    }

    /// The structural parent: the scope of a session or record, the contract
    /// specification of a record specification.
    pub fn parent(&self) -> Option<MetadataId> {
        match *self {
            MetadataId::Session { scope, .. } | MetadataId::Record { scope, .. } => {
                Some(MetadataId::scope(scope))
            }
            MetadataId::RecordSpecification { contract_spec, .. } => {
                Some(MetadataId::contract_spec(contract_spec))
            }
            MetadataId::Scope { .. }
            | MetadataId::ContractSpecification { .. }
            | MetadataId::ScopeSpecification { .. } => None,
        }
    }

    /// Serialize to the fixed-layout byte form.
    pub fn to_bytes(&self) -> Vec<u8> {
        let kind = self.kind();
        let mut bz = Vec::with_capacity(kind.address_len());
        bz.push(kind.tag());
        bz.extend_from_slice(self.primary_uuid().as_bytes());
        match self {
            MetadataId::Session { session, .. } => bz.extend_from_slice(session.as_bytes()),
            MetadataId::Record { name, .. } | MetadataId::RecordSpecification { name, .. } => {
                bz.extend_from_slice(name.as_bytes())
            }
            MetadataId::Scope { .. }
            | MetadataId::ContractSpecification { .. }
            | MetadataId::ScopeSpecification { .. } => {}
        }
        bz
    }

    /// Parse the fixed-layout byte form, validating it first.
    pub fn from_bytes(bz: &[u8]) -> Result<Self> {
        let kind = validate_bytes(bz)?;
        let primary = uuid_at(bz, 1);
        let id = match kind {
            AddressKind::Scope => MetadataId::scope(primary),
            AddressKind::Session => MetadataId::session(primary, uuid_at(bz, 17)),
            AddressKind::Record => MetadataId::Record {
                scope: primary,
                name: name_at(bz),
            },
            AddressKind::ContractSpecification => MetadataId::contract_spec(primary),
            AddressKind::ScopeSpecification => MetadataId::scope_spec(primary),
            AddressKind::RecordSpecification => MetadataId::RecordSpecification {
                contract_spec: primary,
                name: name_at(bz),
            },
        };
        Ok(id)
    }

    pub fn to_address(&self) -> MetadataAddress {
        MetadataAddress::from_raw(self.to_bytes())
    }
}

// Callers have already run `validate_bytes`, so the slices are in range.
fn uuid_at(bz: &[u8], start: usize) -> Uuid {
    let mut arr = [0u8; 16];
    arr.copy_from_slice(&bz[start..start + 16]);
    Uuid::from_bytes(arr)
}

fn name_at(bz: &[u8]) -> NameHash {
    let mut arr = [0u8; 16];
    arr.copy_from_slice(&bz[17..33]);
    NameHash::from_raw(arr)
}

impl From<MetadataId> for MetadataAddress {
    fn from(id: MetadataId) -> Self {
        id.to_address()
    }
}

impl TryFrom<&MetadataAddress> for MetadataId {
    type Error = AddressError;

    fn try_from(addr: &MetadataAddress) -> Result<Self> {
        MetadataId::from_bytes(addr.as_bytes())
    }
}

impl TryFrom<MetadataAddress> for MetadataId {
    type Error = AddressError;

    fn try_from(addr: MetadataAddress) -> Result<Self> {
        MetadataId::from_bytes(addr.as_bytes())
    }
}

impl MetadataAddress {
    /// Scope address for a scope UUID.
    pub fn scope(scope: Uuid) -> Self {
        MetadataId::scope(scope).into()
    }

    /// Session address for a session within a scope.
    pub fn session(scope: Uuid, session: Uuid) -> Self {
        MetadataId::session(scope, session).into()
    }

    /// Record address for a named record within a scope.
    pub fn record(scope: Uuid, name: &str) -> Result<Self> {
        MetadataId::record(scope, name).map(Into::into)
    }

    /// Contract specification address.
    pub fn contract_spec(contract_spec: Uuid) -> Self {
        MetadataId::contract_spec(contract_spec).into()
    }

    /// Scope specification address.
    pub fn scope_spec(scope_spec: Uuid) -> Self {
        MetadataId::scope_spec(scope_spec).into()
    }

    /// Record specification address for a named record within a contract
    /// specification.
    pub fn record_spec(contract_spec: Uuid, name: &str) -> Result<Self> {
        MetadataId::record_spec(contract_spec, name).map(Into::into)
    }

    /// Like [`MetadataAddress::record`], for names already known to be
    /// non-blank.
    ///
    /// # Panics
    ///
    /// Panics if the name is blank. That is a programming error at the call
    /// site, not a runtime condition.
    pub fn must_record(scope: Uuid, name: &str) -> Self {
        Self::record(scope, name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Like [`MetadataAddress::record_spec`], for names already known to be
    /// non-blank.
    ///
    /// # Panics
    ///
    /// Panics if the name is blank.
    pub fn must_record_spec(contract_spec: Uuid, name: &str) -> Self {
        Self::record_spec(contract_spec, name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Decode into the typed view.
    pub fn to_id(&self) -> Result<MetadataId> {
        MetadataId::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn u(s: &str) -> Uuid {
        Uuid::parse_str(s).unwrap()
    }

    fn scope_uuid() -> Uuid {
        u("91978ba2-5f35-459a-86a7-feca1b0512e0")
    }

    #[test]
    fn layouts() {
        let s = scope_uuid();
        let other = u("5803f8bc-6067-4eb5-951f-2121671c2ec0");

        let scope = MetadataId::scope(s).to_bytes();
        assert_eq!(scope.len(), 17);
        assert_eq!(scope[0], 0x00);
        assert_eq!(&scope[1..], s.as_bytes());

        let session = MetadataId::session(s, other).to_bytes();
        assert_eq!(session.len(), 33);
        assert_eq!(session[0], 0x01);
        assert_eq!(&session[17..], other.as_bytes());

        let record = MetadataId::record(s, "recordname").unwrap().to_bytes();
        assert_eq!(record[0], 0x02);
        assert_eq!(
            hex::encode(&record[17..]),
            "eaa9a0549acdb7a2e3858eb5b7b9d1be"
        );

        assert_eq!(MetadataId::contract_spec(s).to_bytes()[0], 0x03);
        assert_eq!(MetadataId::scope_spec(s).to_bytes()[0], 0x04);
        let recspec = MetadataId::record_spec(s, "recordname").unwrap().to_bytes();
        assert_eq!(recspec[0], 0x05);
        assert_eq!(&recspec[17..], &record[17..]);
    }

    #[test]
    fn record_name_normalization() {
        let s = scope_uuid();
        let a = MetadataAddress::record(s, "Foo").unwrap();
        let b = MetadataAddress::record(s, " foo ").unwrap();
        let c = MetadataAddress::record(s, "FOO").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn blank_names_are_invalid_input() {
        assert!(matches!(
            MetadataId::record(scope_uuid(), ""),
            Err(AddressError::InvalidInput(_))
        ));
        assert!(matches!(
            MetadataId::record_spec(scope_uuid(), "   "),
            Err(AddressError::InvalidInput(_))
        ));
    }

    #[test]
    #[should_panic(expected = "missing name value")]
    fn must_record_panics_on_blank_name() {
        MetadataAddress::must_record(scope_uuid(), " ");
    }

    #[test]
    fn parent_of_each_kind() {
        let s = scope_uuid();
        let scope = MetadataId::scope(s);
        assert_eq!(scope.parent(), None);
        assert_eq!(MetadataId::session(s, Uuid::nil()).parent(), Some(scope));
        assert_eq!(MetadataId::record(s, "r").unwrap().parent(), Some(scope));
        assert_eq!(
            MetadataId::record_spec(s, "r").unwrap().parent(),
            Some(MetadataId::contract_spec(s))
        );
        assert_eq!(MetadataId::scope_spec(s).parent(), None);
        assert_eq!(MetadataId::contract_spec(s).parent(), None);
    }

    #[test]
    fn from_bytes_rejects_invalid() {
        assert_eq!(MetadataId::from_bytes(&[]), Err(AddressError::Empty));
        assert!(MetadataId::from_bytes(&[0x01; 17]).is_err());
    }

    #[test]
    fn try_from_address() {
        let addr = MetadataAddress::session(scope_uuid(), Uuid::nil());
        let id = MetadataId::try_from(&addr).unwrap();
        assert_eq!(id.kind(), AddressKind::Session);
        assert_eq!(MetadataAddress::from(id), addr);
    }

    proptest! {
        #[test]
        fn bytes_roundtrip(a in any::<[u8; 16]>(), b in any::<[u8; 16]>(), name in "[a-z]{1,12}") {
            let (a, b) = (Uuid::from_bytes(a), Uuid::from_bytes(b));
            let ids = [
                MetadataId::scope(a),
                MetadataId::session(a, b),
                MetadataId::record(a, &name).unwrap(),
                MetadataId::contract_spec(a),
                MetadataId::scope_spec(a),
                MetadataId::record_spec(a, &name).unwrap(),
            ];
            for id in ids {
                let bz = id.to_bytes();
                prop_assert_eq!(bz.len(), id.kind().address_len());
                prop_assert_eq!(MetadataId::from_bytes(&bz).unwrap(), id);
            }
        }
    }
}
