use serde::{Deserialize, Serialize};

use super::EncryptionAlgorithm;

/// Encrypted data structure; byte fields serialise as base64
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    pub algorithm: EncryptionAlgorithm,
    /// Ciphertext followed by the authentication tag
    #[serde(with = "base64_bytes")]
    pub ciphertext: Vec<u8>,
    #[serde(with = "base64_bytes")]
    pub nonce: Vec<u8>,
}

pub(crate) mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypted_data_json_shape() {
        let data = EncryptedData {
            algorithm: EncryptionAlgorithm::AES256GCM,
            ciphertext: vec![1, 2, 3, 4],
            nonce: vec![5, 6, 7, 8],
        };

        let json = serde_json::to_value(&data).expect("Failed to serialize");
        assert_eq!(json["algorithm"], "AES256GCM");
        assert_eq!(json["ciphertext"], "AQIDBA==");

        let parsed: EncryptedData = serde_json::from_value(json).expect("Failed to deserialize");
        assert_eq!(parsed, data);
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let json = r#"{"algorithm":"AES256GCM","ciphertext":"***","nonce":""}"#;
        assert!(serde_json::from_str::<EncryptedData>(json).is_err());
    }
}
