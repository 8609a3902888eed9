//! The raw metadata address and its validation.

use std::fmt;

use mda_types::{NameHash, Uuid};

use crate::error::{AddressError, Result};
use crate::kind::{AddressKind, SecondSlot, LONG_ADDRESS_LEN, SHORT_ADDRESS_LEN};

const PRIMARY: std::ops::Range<usize> = 1..SHORT_ADDRESS_LEN;
const SECONDARY: std::ops::Range<usize> = SHORT_ADDRESS_LEN..LONG_ADDRESS_LEN;

/// A metadata address: a tag byte followed by one or two 16-byte slots.
///
/// The bytes are used verbatim as keys in an ordered store, so `Ord` is plain
/// lexicographic byte order. A `MetadataAddress` may hold bytes that do not
/// validate (it is also the carrier for diagnostics); use
/// [`MetadataAddress::from_bytes_checked`] or [`crate::MetadataId`] when a
/// well-formed address is required.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MetadataAddress(Vec<u8>);

/// Check a byte sequence against the address table and return its kind.
///
/// Succeeds iff the sequence is non-empty, starts with a known tag, and has
/// exactly the length that tag requires. UUID slots are only length-checked:
/// any 16 bytes are accepted, whatever their version or variant bits.
pub fn validate_bytes(bz: &[u8]) -> Result<AddressKind> {
    let tag = *bz.first().ok_or(AddressError::Empty)?;
    let kind = AddressKind::from_tag(tag).ok_or(AddressError::UnknownType(tag))?;
    if bz.len() != kind.address_len() {
        return Err(AddressError::LengthMismatch {
            expected: kind.address_len(),
            actual: bz.len(),
        });
    }
    uuid_from(&bz[PRIMARY], "primary")?;
    if kind.second_slot() == SecondSlot::Uuid {
        uuid_from(&bz[SECONDARY], "secondary")?;
    }
    Ok(kind)
}

fn uuid_from(bytes: &[u8], slot: &'static str) -> Result<Uuid> {
    Uuid::from_slice(bytes).map_err(|e| AddressError::MalformedUuid {
        slot,
        reason: e.to_string(),
    })
}

impl MetadataAddress {
    /// The unset address.
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wrap bytes without any validation.
    ///
    /// This is the diagnostic path (hex input, details, tests); prefer
    /// [`MetadataAddress::from_bytes_checked`] elsewhere.
    pub fn from_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Wrap bytes, accepting the empty (unset) address and otherwise
    /// requiring a valid layout.
    pub fn from_bytes_checked(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        if !bytes.is_empty() {
            validate_bytes(&bytes)?;
        }
        Ok(Self(bytes))
    }

    /// The raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the address, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Number of bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the unset address.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate the layout and return the kind.
    pub fn validate(&self) -> Result<AddressKind> {
        validate_bytes(&self.0)
    }

    /// The kind named by the tag byte, without checking the length.
    pub fn tagged_kind(&self) -> Option<AddressKind> {
        self.0.first().copied().and_then(AddressKind::from_tag)
    }

    /// The bech32 prefix selected by the tag byte.
    ///
    /// Only the tag is consulted, so a known tag on a mis-sized address still
    /// yields its prefix; [`MetadataAddress::validate`] is the full check.
    pub fn prefix(&self) -> Result<&'static str> {
        let tag = *self.0.first().ok_or(AddressError::Empty)?;
        AddressKind::from_tag(tag)
            .map(AddressKind::hrp)
            .ok_or(AddressError::UnknownType(tag))
    }

    /// Returns `true` if the address validates and has the given kind.
    pub fn is_kind(&self, kind: AddressKind) -> bool {
        self.validate().is_ok_and(|k| k == kind)
    }

    pub fn is_scope(&self) -> bool {
        self.is_kind(AddressKind::Scope)
    }

    pub fn is_session(&self) -> bool {
        self.is_kind(AddressKind::Session)
    }

    pub fn is_record(&self) -> bool {
        self.is_kind(AddressKind::Record)
    }

    pub fn is_scope_spec(&self) -> bool {
        self.is_kind(AddressKind::ScopeSpecification)
    }

    pub fn is_contract_spec(&self) -> bool {
        self.is_kind(AddressKind::ContractSpecification)
    }

    pub fn is_record_spec(&self) -> bool {
        self.is_kind(AddressKind::RecordSpecification)
    }

    /// Require a valid address of the given kind.
    pub fn validate_has_kind(&self, expected: AddressKind) -> Result<()> {
        let actual = self.validate().map_err(|source| AddressError::Invalid {
            expected,
            address: self.debug_hex(),
            source: Box::new(source),
        })?;
        if actual != expected {
            return Err(AddressError::UnexpectedKind {
                expected,
                actual,
                address: self.to_string(),
            });
        }
        Ok(())
    }

    /// Require a valid scope address.
    pub fn validate_is_scope(&self) -> Result<()> {
        self.validate_has_kind(AddressKind::Scope)
    }

    /// Require a valid scope specification address.
    pub fn validate_is_scope_spec(&self) -> Result<()> {
        self.validate_has_kind(AddressKind::ScopeSpecification)
    }

    /// Bytes `1..17` as a UUID, for any known kind.
    pub fn primary_uuid(&self) -> Result<Uuid> {
        self.known_kind()?;
        uuid_from(self.slot(PRIMARY)?, "primary")
    }

    /// Bytes `17..33` as a UUID. Only sessions have one.
    pub fn secondary_uuid(&self) -> Result<Uuid> {
        let kind = self.known_kind()?;
        if kind.second_slot() != SecondSlot::Uuid {
            return Err(self.wrong_type("secondary uuid"));
        }
        uuid_from(self.slot(SECONDARY)?, "secondary")
    }

    /// Bytes `17..33` as a name hash. Only records and record specifications
    /// have one.
    pub fn name_hash(&self) -> Result<NameHash> {
        let kind = self.known_kind()?;
        if kind.second_slot() != SecondSlot::NameHash {
            return Err(self.wrong_type("name hash"));
        }
        NameHash::from_slice(self.slot(SECONDARY)?)
            .map_err(|e| AddressError::Decode(e.to_string()))
    }

    /// The scope UUID of a scope, session, or record address.
    pub fn scope_uuid(&self) -> Result<Uuid> {
        match self.tagged_kind() {
            Some(kind) if kind.carries_scope_uuid() => self.primary_uuid(),
            _ => Err(self.wrong_type("scope uuid")),
        }
    }

    /// The session UUID of a session address.
    pub fn session_uuid(&self) -> Result<Uuid> {
        match self.tagged_kind() {
            Some(AddressKind::Session) => self.secondary_uuid(),
            _ => Err(self.wrong_type("session uuid")),
        }
    }

    /// The UUID of a scope specification address.
    pub fn scope_spec_uuid(&self) -> Result<Uuid> {
        match self.tagged_kind() {
            Some(AddressKind::ScopeSpecification) => self.primary_uuid(),
            _ => Err(self.wrong_type("scope specification uuid")),
        }
    }

    /// The contract specification UUID of a contract specification or
    /// record specification address.
    pub fn contract_spec_uuid(&self) -> Result<Uuid> {
        match self.tagged_kind() {
            Some(kind) if kind.carries_contract_spec_uuid() => self.primary_uuid(),
            _ => Err(self.wrong_type("contract specification uuid")),
        }
    }

    fn wrong_type(&self, component: &'static str) -> AddressError {
        AddressError::WrongType {
            address: self.to_string(),
            component,
        }
    }

    fn known_kind(&self) -> Result<AddressKind> {
        let tag = *self.0.first().ok_or(AddressError::Empty)?;
        AddressKind::from_tag(tag).ok_or(AddressError::UnknownType(tag))
    }

    /// A slot of an address that may carry trailing bytes; only a short
    /// address is an error.
    fn slot(&self, range: std::ops::Range<usize>) -> Result<&[u8]> {
        self.0.get(range.clone()).ok_or(AddressError::LengthMismatch {
            expected: range.end,
            actual: self.0.len(),
        })
    }

    /// `MetadataAddress{0x0, 0x1, ...}`: the marked fallback used when the
    /// bytes cannot be rendered as bech32.
    pub fn debug_hex(&self) -> String {
        let body: Vec<String> = self.0.iter().map(|b| format!("{b:#x}")).collect();
        format!("MetadataAddress{{{}}}", body.join(", "))
    }
}

impl AsRef<[u8]> for MetadataAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<MetadataAddress> for Vec<u8> {
    fn from(addr: MetadataAddress) -> Self {
        addr.0
    }
}

impl fmt::Debug for MetadataAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.validate().is_ok() {
            write!(f, "MetadataAddress({self})")
        } else {
            f.write_str(&self.debug_hex())
        }
    }
}

impl fmt::Display for MetadataAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
