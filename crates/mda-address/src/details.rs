//! Component breakdown of an address, for diagnostics.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::address::MetadataAddress;
use crate::kind::SHORT_ADDRESS_LEN;

/// Every component of a [`MetadataAddress`], in raw and rendered form.
///
/// Built by [`MetadataAddress::details`], which never fails: components
/// that an address does not have (or cannot be read) are left empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AddressDetails {
    /// A copy of the address in question.
    pub address: MetadataAddress,
    /// The tag byte; length 1 whenever the address is non-empty.
    pub address_prefix: Vec<u8>,
    /// Bytes `1..17`; length 16 whenever the address is long enough.
    pub address_primary_uuid: Vec<u8>,
    /// Bytes `17..33` of a session address.
    pub address_secondary_uuid: Vec<u8>,
    /// Bytes `17..33` of a record or record specification address.
    pub address_name_hash: Vec<u8>,
    /// Any bytes past the expected end of the address.
    pub address_excess: Vec<u8>,
    /// Bech32 prefix for the tag, or the tag in hex if it is unknown.
    pub prefix: String,
    pub primary_uuid: String,
    pub secondary_uuid: String,
    pub name_hash_hex: String,
    pub name_hash_base64: String,
    pub excess_hex: String,
    pub excess_base64: String,
    /// Scope of a session or record, contract specification of a record
    /// specification; empty otherwise.
    pub parent_address: MetadataAddress,
}

impl MetadataAddress {
    /// Break this address down into its components.
    pub fn details(&self) -> AddressDetails {
        let addr = self.clone();
        let bytes = addr.as_bytes();
        let mut details = AddressDetails::default();

        if let Some(tag) = bytes.first() {
            details.address_prefix = vec![*tag];
            details.prefix = match addr.prefix() {
                Ok(prefix) => prefix.to_string(),
                Err(_) => hex::encode([*tag]),
            };
        }

        if bytes.len() >= SHORT_ADDRESS_LEN {
            let primary = &bytes[1..SHORT_ADDRESS_LEN];
            details.address_primary_uuid = primary.to_vec();
            if let Ok(id) = mda_types::Uuid::from_slice(primary) {
                details.primary_uuid = id.to_string();
            }
        }

        let secondary = addr.secondary_uuid();
        if let Ok(id) = &secondary {
            details.address_secondary_uuid = id.as_bytes().to_vec();
            details.secondary_uuid = id.to_string();
        }

        let name_hash = addr.name_hash();
        if let Ok(hash) = &name_hash {
            details.address_name_hash = hash.as_bytes().to_vec();
            details.name_hash_hex = hash.to_hex();
            details.name_hash_base64 = hash.to_base64();
        }

        let mut expected_len = SHORT_ADDRESS_LEN;
        if secondary.is_ok() || name_hash.is_ok() {
            expected_len += 16;
        }
        if bytes.len() > expected_len {
            let excess = &bytes[expected_len..];
            details.address_excess = excess.to_vec();
            details.excess_hex = hex::encode(excess);
            details.excess_base64 = STANDARD.encode(excess);
        }

        details.parent_address = addr.parent().unwrap_or_default();
        details.address = addr;
        details
    }
}
