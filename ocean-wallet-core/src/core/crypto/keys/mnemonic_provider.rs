use async_trait::async_trait;
use bip32::{DerivationPath, XPrv};
use secp256k1::ecdsa::Signature;
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};
use std::str::FromStr;
use std::sync::Arc;
use zeroize::Zeroizing;

use super::hd_node::{WalletHdNode, WalletHdNodeProvider};
use super::mnemonic::mnemonic_to_seed;
use crate::shared::constants::{HASH_SIZE, PRIVATE_KEY_SIZE};
use crate::shared::error::WalletError;

/// Unprotected provider deriving nodes from a plain BIP39 seed
#[derive(Clone)]
pub struct MnemonicHdNodeProvider {
    root: Arc<XPrv>,
    secp: Arc<Secp256k1<secp256k1::All>>,
}

impl MnemonicHdNodeProvider {
    pub fn from_seed(seed: &[u8]) -> Result<Self, WalletError> {
        let root = XPrv::new(seed)
            .map_err(|e| WalletError::crypto(format!("Failed to create XPrv: {}", e)))?;
        Ok(Self {
            root: Arc::new(root),
            secp: Arc::new(Secp256k1::new()),
        })
    }

    pub fn from_words(words: &[String]) -> Result<Self, WalletError> {
        let seed = mnemonic_to_seed(words);
        Self::from_seed(&seed[..])
    }
}

impl WalletHdNodeProvider for MnemonicHdNodeProvider {
    type Node = MnemonicHdNode;

    fn derive(&self, path: &str) -> MnemonicHdNode {
        MnemonicHdNode {
            root: Arc::clone(&self.root),
            secp: Arc::clone(&self.secp),
            path: normalize_path(path),
        }
    }
}

/// Relative paths ("0", "1129/0/0/0") hang off the master node.
fn normalize_path(path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path == "m" {
        "m".to_string()
    } else if path.starts_with("m/") {
        path.to_string()
    } else {
        format!("m/{}", path.trim_start_matches('/'))
    }
}

pub struct MnemonicHdNode {
    root: Arc<XPrv>,
    secp: Arc<Secp256k1<secp256k1::All>>,
    path: String,
}

impl MnemonicHdNode {
    pub fn path(&self) -> &str {
        &self.path
    }

    fn derive_xprv(&self) -> Result<XPrv, WalletError> {
        let derivation_path = DerivationPath::from_str(&self.path)
            .map_err(|e| WalletError::crypto(format!("Invalid derivation path {}: {}", self.path, e)))?;

        let mut child_xprv = (*self.root).clone();
        for child_number in derivation_path.into_iter() {
            child_xprv = child_xprv.derive_child(child_number)
                .map_err(|e| WalletError::crypto(format!("Failed to derive child XPrv: {}", e)))?;
        }
        Ok(child_xprv)
    }

    fn secret_key(&self) -> Result<SecretKey, WalletError> {
        let xprv = self.derive_xprv()?;
        let key_bytes = xprv.private_key().to_bytes();
        let key_array: [u8; PRIVATE_KEY_SIZE] = key_bytes.as_slice()
            .try_into()
            .map_err(|_| WalletError::crypto("Invalid private key length"))?;
        SecretKey::from_byte_array(key_array)
            .map_err(|e| WalletError::crypto(format!("Invalid private key: {}", e)))
    }

    fn message(hash: &[u8]) -> Result<Message, WalletError> {
        let digest: [u8; HASH_SIZE] = hash
            .try_into()
            .map_err(|_| WalletError::validation("Message hash must be 32 bytes"))?;
        Ok(Message::from_digest(digest))
    }
}

#[async_trait]
impl WalletHdNode for MnemonicHdNode {
    async fn public_key(&self) -> Result<Vec<u8>, WalletError> {
        let secret_key = self.secret_key()?;
        Ok(PublicKey::from_secret_key(&self.secp, &secret_key).serialize().to_vec())
    }

    async fn private_key(&self) -> Result<Zeroizing<Vec<u8>>, WalletError> {
        let secret_key = self.secret_key()?;
        Ok(Zeroizing::new(secret_key.secret_bytes().to_vec()))
    }

    async fn sign(&self, hash: &[u8]) -> Result<Vec<u8>, WalletError> {
        let message = Self::message(hash)?;
        let secret_key = self.secret_key()?;
        let signature = self.secp.sign_ecdsa(message, &secret_key);
        Ok(signature.serialize_der().to_vec())
    }

    async fn verify(&self, hash: &[u8], signature: &[u8]) -> Result<bool, WalletError> {
        let message = Self::message(hash)?;
        let signature = match Signature::from_der(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        let secret_key = self.secret_key()?;
        let public_key = PublicKey::from_secret_key(&self.secp, &secret_key);
        Ok(self.secp.verify_ecdsa(message, &signature, &public_key).is_ok())
    }
}
