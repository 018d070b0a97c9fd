use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::repositories::StorageRepository;
use crate::shared::error::WalletError;

/// In-process key-value store
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> Result<Vec<String>, WalletError> {
        let storage = self.data.lock()
            .map_err(|_| WalletError::storage("Storage lock poisoned"))?;
        Ok(storage.keys().cloned().collect())
    }
}

#[async_trait]
impl StorageRepository for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
        let storage = self.data.lock()
            .map_err(|_| WalletError::storage("Storage lock poisoned"))?;
        Ok(storage.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
        let mut storage = self.data.lock()
            .map_err(|_| WalletError::storage("Storage lock poisoned"))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), WalletError> {
        let mut storage = self.data.lock()
            .map_err(|_| WalletError::storage("Storage lock poisoned"))?;
        storage.remove(key);
        Ok(())
    }
}
