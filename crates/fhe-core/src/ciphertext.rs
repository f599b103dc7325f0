//! Opaque ciphertext handles

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Error, Result};

/// 32-byte key the server stores a ciphertext under
pub type CiphertextKey = [u8; 32];

/// Key of the server's encrypted zero, used as the "no-op" branch of
/// conditional transfers
pub const ZERO_KEY: CiphertextKey = [0u8; 32];

/// An encrypted value owned by the FHE server.
///
/// The structure is defined server-side, so this is kept as raw JSON and
/// forwarded as-is. In practice the server addresses ciphertexts by a
/// 32-byte key serialized as an array of numbers, which [`Ciphertext::from_key`]
/// produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext(Value);

impl Ciphertext {
    /// Wrap an arbitrary JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Build from a 32-byte key (serialized as `[b0, b1, ..., b31]`)
    pub fn from_key(key: CiphertextKey) -> Self {
        Self(Value::Array(key.iter().map(|b| Value::from(*b)).collect()))
    }

    /// Parse a hex string (optionally `0x`-prefixed) into a 32-byte key
    pub fn from_hex(s: &str) -> Result<Self> {
        let stripped = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(stripped).map_err(|e| Error::InvalidKey(e.to_string()))?;
        let key: CiphertextKey = bytes.try_into().map_err(|b: Vec<u8>| {
            Error::InvalidKey(format!("expected 32 bytes, got {}", b.len()))
        })?;
        Ok(Self::from_key(key))
    }

    /// Unwrap into the underlying JSON value
    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<CiphertextKey> for Ciphertext {
    fn from(key: CiphertextKey) -> Self {
        Self::from_key(key)
    }
}

impl From<Value> for Ciphertext {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_serializes_as_number_array() {
        let mut key = [0u8; 32];
        key[0] = 1;
        key[31] = 255;

        let json = serde_json::to_value(Ciphertext::from_key(key)).unwrap();
        let arr = json.as_array().unwrap();

        assert_eq!(arr.len(), 32);
        assert_eq!(arr[0], json!(1));
        assert_eq!(arr[1], json!(0));
        assert_eq!(arr[31], json!(255));
    }

    #[test]
    fn test_opaque_value_passes_through() {
        let blob = json!({"ct": "abcd", "nested": [1, 2, {"x": null}]});
        let ct = Ciphertext::new(blob.clone());

        assert_eq!(serde_json::to_value(&ct).unwrap(), blob);

        let back: Ciphertext = serde_json::from_value(blob.clone()).unwrap();
        assert_eq!(back.into_value(), blob);
    }

    #[test]
    fn test_from_hex() {
        let hex_key = format!("0x{}", "ab".repeat(32));
        let ct = Ciphertext::from_hex(&hex_key).unwrap();
        assert_eq!(ct, Ciphertext::from_key([0xab; 32]));

        let unprefixed = Ciphertext::from_hex(&"00".repeat(32)).unwrap();
        assert_eq!(unprefixed, Ciphertext::from_key(ZERO_KEY));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            Ciphertext::from_hex("abcd"),
            Err(Error::InvalidKey(msg)) if msg.contains("got 2")
        ));
        assert!(matches!(
            Ciphertext::from_hex("zz"),
            Err(Error::InvalidKey(_))
        ));
    }
}
