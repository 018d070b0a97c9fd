use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::Aes256Gcm;
use argon2::Argon2;
use chacha20poly1305::ChaCha20Poly1305;
use zeroize::Zeroizing;

use super::{EncryptedData, EncryptionAlgorithm};
use crate::shared::constants::{KEY_SIZE, NONCE_SIZE, SALT_SIZE, TAG_SIZE};
use crate::shared::error::WalletError;
use crate::shared::utils::generate_secure_random_bytes;
use crate::shared::WalletResult;

/// AEAD sealing of secrets with keys derived from a passcode.
///
/// The stored ciphertext carries its authentication tag at the end.
pub struct EncryptionManager {
    algorithm: EncryptionAlgorithm,
}

impl EncryptionManager {
    pub fn new(algorithm: EncryptionAlgorithm) -> Self {
        Self { algorithm }
    }

    pub fn new_default() -> Self {
        Self::new(EncryptionAlgorithm::default())
    }

    pub fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    pub fn encrypt(&self, data: &[u8], key: &[u8]) -> WalletResult<EncryptedData> {
        check_key(key)?;
        let nonce = generate_secure_random_bytes(NONCE_SIZE);
        let sealed = match self.algorithm {
            EncryptionAlgorithm::AES256GCM => seal::<Aes256Gcm>(key, &nonce, data),
            EncryptionAlgorithm::ChaCha20Poly1305 => seal::<ChaCha20Poly1305>(key, &nonce, data),
        };
        let ciphertext = sealed
            .map_err(|e| WalletError::crypto(format!("{:?} encryption failed: {}", self.algorithm, e)))?;

        Ok(EncryptedData {
            algorithm: self.algorithm,
            ciphertext,
            nonce,
        })
    }

    /// Decrypt with the algorithm recorded in the data, not the manager's own
    pub fn decrypt(&self, encrypted_data: &EncryptedData, key: &[u8]) -> WalletResult<Zeroizing<Vec<u8>>> {
        check_key(key)?;
        if encrypted_data.nonce.len() != NONCE_SIZE {
            return Err(WalletError::crypto("Invalid nonce length"));
        }
        if encrypted_data.ciphertext.len() < TAG_SIZE {
            return Err(WalletError::crypto("Ciphertext is shorter than its tag"));
        }

        let algorithm = encrypted_data.algorithm;
        let opened = match algorithm {
            EncryptionAlgorithm::AES256GCM => {
                open::<Aes256Gcm>(key, &encrypted_data.nonce, &encrypted_data.ciphertext)
            }
            EncryptionAlgorithm::ChaCha20Poly1305 => {
                open::<ChaCha20Poly1305>(key, &encrypted_data.nonce, &encrypted_data.ciphertext)
            }
        };
        opened
            .map(Zeroizing::new)
            .map_err(|e| WalletError::crypto(format!("{:?} decryption failed: {}", algorithm, e)))
    }

    /// Derive an encryption key from a passcode with Argon2id
    pub fn derive_key(&self, passcode: &str, salt: &[u8]) -> WalletResult<Zeroizing<[u8; KEY_SIZE]>> {
        if passcode.is_empty() {
            return Err(WalletError::validation("Passcode cannot be empty"));
        }
        let mut key = Zeroizing::new([0u8; KEY_SIZE]);
        Argon2::default().hash_password_into(passcode.as_bytes(), salt, &mut key[..])?;
        Ok(key)
    }

    pub fn generate_salt(&self) -> Vec<u8> {
        generate_secure_random_bytes(SALT_SIZE)
    }
}

fn check_key(key: &[u8]) -> WalletResult<()> {
    if key.len() != KEY_SIZE {
        return Err(WalletError::crypto(format!("Encryption key must be {} bytes", KEY_SIZE)));
    }
    Ok(())
}

fn seal<C: KeyInit + Aead>(key: &[u8], nonce: &[u8], data: &[u8]) -> Result<Vec<u8>, String> {
    let cipher = C::new_from_slice(key).map_err(|e| e.to_string())?;
    cipher
        .encrypt(Nonce::<C>::from_slice(nonce), data)
        .map_err(|e| e.to_string())
}

fn open<C: KeyInit + Aead>(key: &[u8], nonce: &[u8], sealed: &[u8]) -> Result<Vec<u8>, String> {
    let cipher = C::new_from_slice(key).map_err(|e| e.to_string())?;
    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), sealed)
        .map_err(|e| e.to_string())
}
