//! Content fingerprints for declarative pipelines.
//!
//! A value is serialized to JSON and the bytes are hashed with blake3, so two
//! values with equal serde output always share a fingerprint.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

pub fn hash_bytes(bytes: &[u8]) -> Hash256 {
    Hash256(*blake3::hash(bytes).as_bytes())
}

pub fn hash_serde<T: Serialize>(v: &T) -> Result<Hash256> {
    let bytes = serde_json::to_vec(v)?;
    Ok(hash_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_hash_matches_byte_hash() {
        let a = hash_serde(&vec![1, 2, 3]).unwrap();
        assert_eq!(a, hash_bytes(b"[1,2,3]"));
        assert_ne!(a, hash_bytes(b"[1,2,4]"));
        assert_eq!(a.to_hex().len(), 64);
        assert_eq!(a.to_string(), a.to_hex());
    }

    #[test]
    fn unserializable_value_is_a_hash_error() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(vec![1u8], 1);
        let err = hash_serde(&map).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Hash);
    }
}
