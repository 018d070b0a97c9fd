//! Storage repository for data access
//!
//! Narrow key-value contract the wallet persists seeds, the active network
//! and notification preferences through. Backends serialise their own reads
//! and writes; each key has a single logical owner.

use crate::shared::error::WalletError;
use async_trait::async_trait;

/// Storage repository trait
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// Read a value; a missing key is `Ok(None)`
    async fn get_item(&self, key: &str) -> Result<Option<String>, WalletError>;

    /// Write a value, replacing any previous one
    async fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError>;

    /// Remove a value; removing a missing key succeeds
    async fn remove_item(&self, key: &str) -> Result<(), WalletError>;

    /// Check if key exists
    async fn exists(&self, key: &str) -> Result<bool, WalletError> {
        Ok(self.get_item(key).await?.is_some())
    }
}
