//! Derivation of related addresses.
//!
//! Each function reads one identity component out of an existing address
//! and re-encodes it, optionally together with new identity. Component
//! extraction only looks at the tag and the bytes it needs, so an address
//! with trailing bytes still yields its parent.

use mda_types::Uuid;

use crate::address::MetadataAddress;
use crate::error::Result;
use crate::id::MetadataId;

impl MetadataAddress {
    /// The scope address for a scope, session, or record address.
    ///
    /// Applied to a scope address this returns an equal address.
    pub fn as_scope(&self) -> Result<MetadataAddress> {
        Ok(MetadataId::scope(self.scope_uuid()?).into())
    }

    /// A session in the same scope as this scope, session, or record address.
    pub fn as_session(&self, session: Uuid) -> Result<MetadataAddress> {
        Ok(MetadataId::session(self.scope_uuid()?, session).into())
    }

    /// A named record in the same scope as this scope, session, or record
    /// address.
    pub fn as_record(&self, name: &str) -> Result<MetadataAddress> {
        let scope = self.scope_uuid()?;
        MetadataAddress::record(scope, name)
    }

    /// The contract specification address for a contract specification or
    /// record specification address.
    ///
    /// Applied to a contract specification address this returns an equal
    /// address.
    pub fn as_contract_spec(&self) -> Result<MetadataAddress> {
        Ok(MetadataId::contract_spec(self.contract_spec_uuid()?).into())
    }

    /// A named record specification under the same contract specification.
    pub fn as_record_spec(&self, name: &str) -> Result<MetadataAddress> {
        let contract_spec = self.contract_spec_uuid()?;
        MetadataAddress::record_spec(contract_spec, name)
    }

    /// The structural parent: the scope of a session or record, the contract
    /// specification of a record specification, otherwise `None`.
    pub fn parent(&self) -> Option<MetadataAddress> {
        if !self.is_scope() {
            if let Ok(scope) = self.as_scope() {
                return Some(scope);
            }
        }
        if !self.is_contract_spec() {
            if let Ok(spec) = self.as_contract_spec() {
                return Some(spec);
            }
        }
        None
    }

    /// [`MetadataAddress::as_scope`] for addresses already known to carry a
    /// scope UUID.
    ///
    /// # Panics
    ///
    /// Panics if the address has no scope UUID; callers use this only after
    /// proving the kind.
    pub fn must_as_scope(&self) -> MetadataAddress {
        self.as_scope().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the address has no scope UUID.
    pub fn must_as_session(&self, session: Uuid) -> MetadataAddress {
        self.as_session(session).unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the address has no scope UUID or the name is blank.
    pub fn must_as_record(&self, name: &str) -> MetadataAddress {
        self.as_record(name).unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the address has no contract specification UUID.
    pub fn must_as_contract_spec(&self) -> MetadataAddress {
        self.as_contract_spec().unwrap_or_else(|e| panic!("{e}"))
    }

    /// # Panics
    ///
    /// Panics if the address has no contract specification UUID or the name
    /// is blank.
    pub fn must_as_record_spec(&self, name: &str) -> MetadataAddress {
        self.as_record_spec(name).unwrap_or_else(|e| panic!("{e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressError;
    use proptest::prelude::*;

    fn scope_uuid() -> Uuid {
        Uuid::parse_str("91978ba2-5f35-459a-86a7-feca1b0512e0").unwrap()
    }

    fn other_uuid() -> Uuid {
        Uuid::parse_str("5803f8bc-6067-4eb5-951f-2121671c2ec0").unwrap()
    }

    #[test]
    fn as_scope_from_children() {
        let scope = MetadataAddress::scope(scope_uuid());
        let session = MetadataAddress::session(scope_uuid(), other_uuid());
        let record = MetadataAddress::record(scope_uuid(), "name").unwrap();
        assert_eq!(session.as_scope().unwrap(), scope);
        assert_eq!(record.as_scope().unwrap(), scope);
        assert_eq!(scope.as_scope().unwrap(), scope);
    }

    #[test]
    fn as_scope_wrong_type() {
        let spec = MetadataAddress::contract_spec(scope_uuid());
        assert!(matches!(
            spec.as_scope(),
            Err(AddressError::WrongType { .. })
        ));
        assert!(matches!(
            MetadataAddress::empty().as_scope(),
            Err(AddressError::WrongType { .. })
        ));
    }

    #[test]
    fn as_session_and_record() {
        let record = MetadataAddress::record(scope_uuid(), "name").unwrap();
        assert_eq!(
            record.as_session(other_uuid()).unwrap(),
            MetadataAddress::session(scope_uuid(), other_uuid())
        );
        let session = MetadataAddress::session(scope_uuid(), other_uuid());
        assert_eq!(
            session.as_record("Other").unwrap(),
            MetadataAddress::record(scope_uuid(), "other").unwrap()
        );
        assert!(matches!(
            session.as_record(""),
            Err(AddressError::InvalidInput(_))
        ));
    }

    #[test]
    fn as_record_checks_kind_before_name() {
        let spec = MetadataAddress::scope_spec(scope_uuid());
        assert!(matches!(
            spec.as_record(""),
            Err(AddressError::WrongType { .. })
        ));
    }

    #[test]
    fn spec_derivations() {
        let cspec = MetadataAddress::contract_spec(scope_uuid());
        let rspec = cspec.as_record_spec("Loan").unwrap();
        assert_eq!(
            rspec,
            MetadataAddress::record_spec(scope_uuid(), "loan").unwrap()
        );
        assert_eq!(rspec.as_contract_spec().unwrap(), cspec);
        assert_eq!(cspec.as_contract_spec().unwrap(), cspec);
        assert!(matches!(
            MetadataAddress::scope(scope_uuid()).as_record_spec("x"),
            Err(AddressError::WrongType { .. })
        ));
        assert!(matches!(
            MetadataAddress::scope_spec(scope_uuid()).as_contract_spec(),
            Err(AddressError::WrongType { .. })
        ));
    }

    #[test]
    fn parent_addresses() {
        let scope = MetadataAddress::scope(scope_uuid());
        let cspec = MetadataAddress::contract_spec(scope_uuid());
        assert_eq!(scope.parent(), None);
        assert_eq!(cspec.parent(), None);
        assert_eq!(MetadataAddress::scope_spec(scope_uuid()).parent(), None);
        assert_eq!(
            MetadataAddress::session(scope_uuid(), other_uuid()).parent(),
            Some(scope.clone())
        );
        assert_eq!(
            cspec.as_record_spec("r").unwrap().parent(),
            Some(cspec.clone())
        );
    }

    #[test]
    #[should_panic(expected = "does not contain a scope uuid")]
    fn must_as_scope_panics_on_wrong_type() {
        MetadataAddress::contract_spec(scope_uuid()).must_as_scope();
    }

    #[test]
    fn must_variants_pass_through() {
        let session = MetadataAddress::session(scope_uuid(), other_uuid());
        assert_eq!(
            session.must_as_scope(),
            MetadataAddress::scope(scope_uuid())
        );
        assert_eq!(
            session.must_as_session(scope_uuid()),
            MetadataAddress::session(scope_uuid(), scope_uuid())
        );
        assert!(session.must_as_record("r").is_record());
        let cspec = MetadataAddress::contract_spec(other_uuid());
        assert_eq!(cspec.must_as_contract_spec(), cspec);
        assert!(cspec.must_as_record_spec("r").is_record_spec());
    }

    proptest! {
        #[test]
        fn derivation_is_idempotent(bytes in any::<[u8; 16]>()) {
            let id = Uuid::from_bytes(bytes);
            let scope = MetadataAddress::scope(id);
            prop_assert_eq!(scope.as_scope().unwrap(), scope);
            let cspec = MetadataAddress::contract_spec(id);
            prop_assert_eq!(cspec.as_contract_spec().unwrap(), cspec);
        }
    }
}
