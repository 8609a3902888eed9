//! The closed table of address kinds.
//!
//! Every metadata address starts with a tag byte that selects exactly one
//! row of this table. The row fixes the total length, the bech32 prefix and
//! what the second 16-byte slot (if any) holds. These values are part of the
//! persisted key format and must never change.

use std::fmt;

use mda_types::UUID_LEN;

/// Length of an address made of a tag byte and one 16-byte slot.
pub const SHORT_ADDRESS_LEN: usize = 1 + UUID_LEN;
/// Length of an address made of a tag byte and two 16-byte slots.
pub const LONG_ADDRESS_LEN: usize = 1 + UUID_LEN + UUID_LEN;

/// What occupies bytes `17..33` of an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondSlot {
    /// Nothing: the address ends after the primary UUID.
    None,
    /// A second UUID.
    Uuid,
    /// A [`mda_types::NameHash`].
    NameHash,
}

/// The six kinds of metadata address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressKind {
    Scope,
    Session,
    Record,
    ContractSpecification,
    ScopeSpecification,
    RecordSpecification,
}

impl AddressKind {
    /// Every kind, in tag order.
    pub const ALL: [AddressKind; 6] = [
        AddressKind::Scope,
        AddressKind::Session,
        AddressKind::Record,
        AddressKind::ContractSpecification,
        AddressKind::ScopeSpecification,
        AddressKind::RecordSpecification,
    ];

    /// The tag byte that starts addresses of this kind.
    pub const fn tag(self) -> u8 {
        match self {
            AddressKind::Scope => 0x00,
            AddressKind::Session => 0x01,
            AddressKind::Record => 0x02,
            AddressKind::ContractSpecification => 0x03,
            AddressKind::ScopeSpecification => 0x04,
            AddressKind::RecordSpecification => 0x05,
        }
    }

    /// Look a kind up by tag byte.
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(AddressKind::Scope),
            0x01 => Some(AddressKind::Session),
            0x02 => Some(AddressKind::Record),
            0x03 => Some(AddressKind::ContractSpecification),
            0x04 => Some(AddressKind::ScopeSpecification),
            0x05 => Some(AddressKind::RecordSpecification),
            _ => None,
        }
    }

    /// The bech32 human-readable prefix, e.g. `"scope"` or `"recspec"`.
    pub const fn hrp(self) -> &'static str {
        match self {
            AddressKind::Scope => "scope",
            AddressKind::Session => "session",
            AddressKind::Record => "record",
            AddressKind::ContractSpecification => "contractspec",
            AddressKind::ScopeSpecification => "scopespec",
            AddressKind::RecordSpecification => "recspec",
        }
    }

    /// Look a kind up by its bech32 prefix.
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.hrp() == hrp)
    }

    /// Name used in messages, e.g. `"record specification"`.
    pub const fn formal_name(self) -> &'static str {
        match self {
            AddressKind::Scope => "scope",
            AddressKind::Session => "session",
            AddressKind::Record => "record",
            AddressKind::ContractSpecification => "contract specification",
            AddressKind::ScopeSpecification => "scope specification",
            AddressKind::RecordSpecification => "record specification",
        }
    }

    /// Content of the second 16-byte slot.
    pub const fn second_slot(self) -> SecondSlot {
        match self {
            AddressKind::Session => SecondSlot::Uuid,
            AddressKind::Record | AddressKind::RecordSpecification => SecondSlot::NameHash,
            AddressKind::Scope
            | AddressKind::ContractSpecification
            | AddressKind::ScopeSpecification => SecondSlot::None,
        }
    }

    /// Required total length of an address of this kind, tag byte included.
    pub const fn address_len(self) -> usize {
        match self.second_slot() {
            SecondSlot::None => SHORT_ADDRESS_LEN,
            SecondSlot::Uuid | SecondSlot::NameHash => LONG_ADDRESS_LEN,
        }
    }

    /// Number of bytes after the tag.
    pub const fn payload_len(self) -> usize {
        self.address_len() - 1
    }

    /// Whether the primary UUID of this kind is a scope UUID.
    pub const fn carries_scope_uuid(self) -> bool {
        matches!(
            self,
            AddressKind::Scope | AddressKind::Session | AddressKind::Record
        )
    }

    /// Whether the primary UUID of this kind is a contract specification UUID.
    pub const fn carries_contract_spec_uuid(self) -> bool {
        matches!(
            self,
            AddressKind::ContractSpecification | AddressKind::RecordSpecification
        )
    }
}

impl fmt::Display for AddressKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hrp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_roundtrip_and_are_distinct() {
        for kind in AddressKind::ALL {
            assert_eq!(AddressKind::from_tag(kind.tag()), Some(kind));
        }
        let mut tags: Vec<u8> = AddressKind::ALL.iter().map(|k| k.tag()).collect();
        tags.dedup();
        assert_eq!(tags.len(), 6);
    }

    #[test]
    fn unknown_tags() {
        assert_eq!(AddressKind::from_tag(0x06), None);
        assert_eq!(AddressKind::from_tag(0xff), None);
    }

    #[test]
    fn hrps_roundtrip() {
        for kind in AddressKind::ALL {
            assert_eq!(AddressKind::from_hrp(kind.hrp()), Some(kind));
        }
        assert_eq!(AddressKind::from_hrp("pb"), None);
    }

    #[test]
    fn lengths() {
        assert_eq!(AddressKind::Scope.address_len(), 17);
        assert_eq!(AddressKind::Session.address_len(), 33);
        assert_eq!(AddressKind::Record.address_len(), 33);
        assert_eq!(AddressKind::ScopeSpecification.address_len(), 17);
        assert_eq!(AddressKind::ContractSpecification.address_len(), 17);
        assert_eq!(AddressKind::RecordSpecification.address_len(), 33);
        assert_eq!(AddressKind::Session.payload_len(), 32);
    }

    #[test]
    fn formal_names() {
        assert_eq!(AddressKind::Scope.formal_name(), "scope");
        assert_eq!(
            AddressKind::ContractSpecification.formal_name(),
            "contract specification"
        );
        assert_eq!(
            AddressKind::RecordSpecification.formal_name(),
            "record specification"
        );
    }

    #[test]
    fn display_is_hrp() {
        assert_eq!(AddressKind::RecordSpecification.to_string(), "recspec");
    }
}
