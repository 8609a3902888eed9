use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use crate::error::TypeError;

/// Number of SHA-256 bytes kept in a [`NameHash`].
pub const NAME_HASH_LEN: usize = 16;

/// Normalize a name before hashing: surrounding whitespace removed, lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Truncated content hash of a record (or record specification) name.
///
/// A `NameHash` is the first 16 bytes of the SHA-256 digest of the
/// normalized name, so `"Foo"`, `" foo "` and `"FOO"` all hash identically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NameHash([u8; NAME_HASH_LEN]);

impl NameHash {
    /// Hash a name. Fails if the name is empty once normalized.
    pub fn of(name: &str) -> Result<Self, TypeError> {
        let normalized = normalize_name(name);
        if normalized.is_empty() {
            return Err(TypeError::EmptyName);
        }
        let digest = Sha256::digest(normalized.as_bytes());
        let mut arr = [0u8; NAME_HASH_LEN];
        arr.copy_from_slice(&digest[..NAME_HASH_LEN]);
        Ok(Self(arr))
    }

    /// Wrap hash bytes that were computed elsewhere.
    pub const fn from_raw(hash: [u8; NAME_HASH_LEN]) -> Self {
        Self(hash)
    }

    /// Copy a hash out of a slice that must be exactly 16 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let arr: [u8; NAME_HASH_LEN] =
            bytes.try_into().map_err(|_| TypeError::InvalidLength {
                expected: NAME_HASH_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// The raw 16 bytes.
    pub fn as_bytes(&self) -> &[u8; NAME_HASH_LEN] {
        &self.0
    }

    /// Lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Standard (padded) base64 encoding.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.0)
    }

    /// Parse from 32 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, TypeError> {
        let bytes = hex::decode(s).map_err(|e| TypeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl fmt::Debug for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameHash({})", self.to_hex())
    }
}

impl fmt::Display for NameHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<NameHash> for [u8; NAME_HASH_LEN] {
    fn from(hash: NameHash) -> Self {
        hash.0
    }
}
