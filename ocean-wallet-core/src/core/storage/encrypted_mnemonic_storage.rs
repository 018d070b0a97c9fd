use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::{NetworkPersistence, Seed};
use crate::core::crypto::encryption::encrypted_data::base64_bytes;
use crate::core::crypto::encryption::{EncryptedData, EncryptionAlgorithm, EncryptionManager};
use crate::core::crypto::keys::mnemonic_to_seed;
use crate::domain::repositories::StorageRepository;
use crate::shared::constants::MNEMONIC_ENCRYPTED_KEY_SUFFIX;
use crate::shared::error::WalletError;

const RECORD_VERSION: u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct EncryptedSeedRecord {
    version: u8,
    #[serde(with = "base64_bytes")]
    salt: Vec<u8>,
    data: EncryptedData,
}

/// Passcode-protected seed store; same scoping as [`super::MnemonicStorage`]
pub struct EncryptedMnemonicStorage {
    storage: Arc<dyn StorageRepository>,
    network: Arc<NetworkPersistence>,
    encryption: EncryptionManager,
}

impl EncryptedMnemonicStorage {
    pub fn new(storage: Arc<dyn StorageRepository>, network: Arc<NetworkPersistence>) -> Self {
        Self::with_algorithm(storage, network, EncryptionAlgorithm::default())
    }

    pub fn with_algorithm(
        storage: Arc<dyn StorageRepository>,
        network: Arc<NetworkPersistence>,
        algorithm: EncryptionAlgorithm,
    ) -> Self {
        Self {
            storage,
            network,
            encryption: EncryptionManager::new(algorithm),
        }
    }

    async fn key(&self) -> Result<String, WalletError> {
        let network = self.network.get().await?;
        Ok(format!(
            "{}.{}.{}",
            self.network.environment().name,
            network,
            MNEMONIC_ENCRYPTED_KEY_SUFFIX
        ))
    }

    pub async fn has(&self) -> Result<bool, WalletError> {
        let key = self.key().await?;
        Ok(self.storage.get_item(&key).await?.is_some())
    }

    pub async fn set(&self, words: &[String], passcode: &str) -> Result<(), WalletError> {
        if words.is_empty() {
            return Err(WalletError::validation("Mnemonic cannot be empty"));
        }
        let seed = mnemonic_to_seed(words);
        let salt = self.encryption.generate_salt();
        let encryption_key = self.encryption.derive_key(passcode, &salt)?;
        let data = self.encryption.encrypt(&seed[..], &encryption_key[..])?;

        let record = EncryptedSeedRecord { version: RECORD_VERSION, salt, data };
        let key = self.key().await?;
        self.storage.set_item(&key, &serde_json::to_string(&record)?).await?;
        log::info!("Stored encrypted mnemonic seed for {}", key);
        Ok(())
    }

    /// Decrypt the stored seed; a wrong passcode is a crypto error
    pub async fn get(&self, passcode: &str) -> Result<Seed, WalletError> {
        let key = self.key().await?;
        let raw = self.storage
            .get_item(&key)
            .await?
            .ok_or_else(|| WalletError::no_seed_stored(key.clone()))?;

        let record: EncryptedSeedRecord = serde_json::from_str(&raw)?;
        if record.version != RECORD_VERSION {
            return Err(WalletError::storage(format!(
                "Unsupported encrypted seed version: {}",
                record.version
            )));
        }

        let encryption_key = self.encryption.derive_key(passcode, &record.salt)?;
        let seed = self.encryption
            .decrypt(&record.data, &encryption_key[..])
            .map_err(|_| WalletError::crypto("Incorrect passcode or corrupted seed"))?;
        Ok(Seed::from_hex(hex::encode(seed.as_slice())))
    }

    pub async fn clear(&self) -> Result<(), WalletError> {
        let key = self.key().await?;
        self.storage.remove_item(&key).await
    }
}
