//! Text, hex, hash, and denom conversions.
//!
//! The bech32 form is the canonical human-readable rendering. The prefix is
//! always recomputed from the bytes when decoding, so a string cannot be
//! relabelled as another kind by swapping its prefix.

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use mda_types::text;
use tracing::debug;

use crate::address::{validate_bytes, MetadataAddress};
use crate::error::{AddressError, Result};
use crate::kind::AddressKind;

/// Prepended to an address's bech32 text to form its asset denom.
pub const DENOM_PREFIX: &str = "nft/";

impl MetadataAddress {
    /// Bech32 text of this address.
    ///
    /// Never fails: the empty address renders as `""` and bytes that do not
    /// validate render as [`MetadataAddress::debug_hex`].
    pub fn to_text(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let kind = match self.validate() {
            Ok(kind) => kind,
            Err(_) => return self.debug_hex(),
        };
        match text::encode(kind.hrp(), self.as_bytes()) {
            Ok(s) => s,
            Err(e) => {
                debug!(error = %e, "bech32 encoding failed");
                self.debug_hex()
            }
        }
    }

    /// Decode bech32 text, returning the address and its prefix.
    ///
    /// The decoded bytes must validate, and the text's prefix must equal the
    /// prefix implied by the bytes' own tag.
    pub fn parse_text(s: &str) -> Result<(Self, &'static str)> {
        if s.trim().is_empty() {
            return Err(AddressError::EmptyInput);
        }
        let (hrp, bytes) = text::decode(s).map_err(|e| AddressError::Decode(e.to_string()))?;
        let kind = validate_bytes(&bytes)?;
        if kind.hrp() != hrp {
            debug!(expected = kind.hrp(), actual = %hrp, "rejecting relabelled address");
            return Err(AddressError::PrefixMismatch {
                expected: kind.hrp().to_string(),
                actual: hrp,
            });
        }
        Ok((Self::from_raw(bytes), kind.hrp()))
    }

    /// Decode bech32 text. See [`MetadataAddress::parse_text`].
    pub fn from_text(s: &str) -> Result<Self> {
        Self::parse_text(s).map(|(addr, _)| addr)
    }

    /// Lowercase hex of the raw bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Raw bytes from hex. Performs no layout validation.
    pub fn from_hex(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(AddressError::EmptyInput);
        }
        let bytes = hex::decode(s).map_err(|e| AddressError::Decode(e.to_string()))?;
        Ok(Self::from_raw(bytes))
    }

    /// Build an address from a type code and a base64 hash produced elsewhere.
    ///
    /// Only the first byte of `type_code` is used. The decoded hash is
    /// truncated to the kind's payload length; shorter hashes are rejected.
    /// The resulting UUID slots need not hold real UUIDs.
    pub fn from_type_code_and_hash(type_code: &[u8], hash: &str) -> Result<Self> {
        let tag = *type_code
            .first()
            .ok_or_else(|| AddressError::InvalidInput("empty type code bytes".into()))?;
        if hash.is_empty() {
            return Err(AddressError::InvalidInput("empty hash string".into()));
        }
        let kind = AddressKind::from_tag(tag).ok_or(AddressError::UnknownType(tag))?;
        let raw = STANDARD
            .decode(hash)
            .map_err(|e| AddressError::Decode(e.to_string()))?;
        let required = kind.payload_len();
        if raw.len() < required {
            return Err(AddressError::LengthMismatch {
                expected: required,
                actual: raw.len(),
            });
        }
        let mut bytes = Vec::with_capacity(kind.address_len());
        bytes.push(tag);
        bytes.extend_from_slice(&raw[..required]);
        Self::from_bytes_checked(bytes)
    }

    /// Asset denom for this address: `nft/<bech32>`.
    pub fn denom(&self) -> String {
        format!("{DENOM_PREFIX}{}", self.to_text())
    }

    /// Recover an address from its denom.
    pub fn from_denom(denom: &str) -> Result<Self> {
        let id = denom
            .strip_prefix(DENOM_PREFIX)
            .ok_or_else(|| AddressError::NotADenom(denom.to_string()))?;
        Self::from_text(id).map_err(|source| AddressError::InvalidDenom {
            denom: denom.to_string(),
            source: Box::new(source),
        })
    }
}

impl FromStr for MetadataAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_text(s)
    }
}
