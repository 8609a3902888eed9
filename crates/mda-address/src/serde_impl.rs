//! Serde adapter: addresses travel as their bech32 text.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::address::MetadataAddress;

impl Serialize for MetadataAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_text())
    }
}

impl<'de> Deserialize<'de> for MetadataAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        if s.is_empty() {
            return Ok(MetadataAddress::empty());
        }
        MetadataAddress::from_text(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mda_types::Uuid;

    #[test]
    fn json_uses_bech32() {
        let addr = MetadataAddress::scope(
            Uuid::parse_str("91978ba2-5f35-459a-86a7-feca1b0512e0").unwrap(),
        );
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"scope1qzge0zaztu65tx5x5llv5xc9ztsqxlkwel\"");
        let parsed: MetadataAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, addr);
    }

    #[test]
    fn empty_string_is_empty_address() {
        let parsed: MetadataAddress = serde_json::from_str("\"\"").unwrap();
        assert!(parsed.is_empty());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"\"");
    }

    #[test]
    fn invalid_text_fails() {
        assert!(serde_json::from_str::<MetadataAddress>("\"scope1xyz\"").is_err());
    }
}
