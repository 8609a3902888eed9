use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::TypeError;
use crate::text;

/// Human-readable prefix used for accounts when none is given.
pub const DEFAULT_ACCOUNT_HRP: &str = "pb";

/// Opaque account identifier.
///
/// The identifier is a plain byte string; its text form is bech32 under the
/// prefix recorded when the value was built or parsed. Equality, hashing,
/// and ordering use the bytes alone: the same bytes under two prefixes are
/// one account.
#[derive(Clone)]
pub struct AccountId {
    hrp: String,
    bytes: Vec<u8>,
}

impl AccountId {
    /// Account with the default prefix.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_hrp(DEFAULT_ACCOUNT_HRP, bytes)
    }

    /// Account rendered under a specific prefix.
    pub fn with_hrp(hrp: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            hrp: hrp.into(),
            bytes: bytes.into(),
        }
    }

    /// The unset account.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Returns `true` if the account has no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The raw identifier bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The prefix used when rendering.
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// Parse a bech32 account string, keeping whatever prefix it carries.
    pub fn from_bech32(s: &str) -> Result<Self, TypeError> {
        let (hrp, bytes) = text::decode(s.trim())?;
        Ok(Self { hrp, bytes })
    }

    /// Parse a bech32 account string that must use `expected` as its prefix.
    pub fn from_bech32_with_prefix(s: &str, expected: &str) -> Result<Self, TypeError> {
        let bytes = text::decode_with_prefix(s.trim(), expected)?;
        Ok(Self::with_hrp(expected, bytes))
    }

    /// Bech32 text. Empty accounts render as the empty string.
    pub fn to_bech32(&self) -> Result<String, TypeError> {
        if self.bytes.is_empty() {
            return Ok(String::new());
        }
        text::encode(&self.hrp, &self.bytes)
    }
}

impl PartialEq for AccountId {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for AccountId {}

impl Hash for AccountId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl PartialOrd for AccountId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AccountId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bytes.cmp(&other.bytes)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_bech32() {
            Ok(s) => f.write_str(&s),
            // An unusable prefix still leaves the bytes worth showing.
            Err(_) => write!(f, "{}:0x{}", self.hrp, hex::encode(&self.bytes)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AccountId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AccountId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(Self::empty());
        }
        Self::from_bech32(&s).map_err(serde::de::Error::custom)
    }
}
