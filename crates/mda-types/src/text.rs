//! Bech32 text helpers.
//!
//! Both metadata addresses and account identifiers are rendered as classic
//! bech32 (BIP-173 checksum, not bech32m) so they stay interchangeable with
//! other tooling in the same address family.

use bech32::{FromBase32, ToBase32, Variant};

use crate::error::TypeError;

/// Encode raw bytes under the given human-readable prefix.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, TypeError> {
    bech32::encode(hrp, data.to_base32(), Variant::Bech32)
        .map_err(|e| TypeError::InvalidBech32(e.to_string()))
}

/// Decode a bech32 string into its (lowercase) prefix and raw bytes.
pub fn decode(text: &str) -> Result<(String, Vec<u8>), TypeError> {
    let (hrp, data, variant) =
        bech32::decode(text).map_err(|e| TypeError::InvalidBech32(e.to_string()))?;
    if variant != Variant::Bech32 {
        return Err(TypeError::InvalidBech32(
            "expected a bech32 checksum, found bech32m".into(),
        ));
    }
    let bytes =
        Vec::<u8>::from_base32(&data).map_err(|e| TypeError::InvalidBech32(e.to_string()))?;
    Ok((hrp, bytes))
}

/// Decode a bech32 string and require a specific prefix.
pub fn decode_with_prefix(text: &str, expected: &str) -> Result<Vec<u8>, TypeError> {
    let (hrp, bytes) = decode(text)?;
    if hrp != expected {
        return Err(TypeError::PrefixMismatch {
            expected: expected.to_string(),
            actual: hrp,
        });
    }
    Ok(bytes)
}
