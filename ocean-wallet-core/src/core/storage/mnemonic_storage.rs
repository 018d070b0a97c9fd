use std::sync::Arc;
use zeroize::Zeroizing;

use super::NetworkPersistence;
use crate::core::crypto::keys::mnemonic_to_seed;
use crate::domain::entities::EnvironmentNetwork;
use crate::domain::repositories::StorageRepository;
use crate::shared::constants::MNEMONIC_SEED_KEY_SUFFIX;
use crate::shared::error::WalletError;

/// Hex-encoded seed read from storage, cleared on drop
pub struct Seed {
    hex: Zeroizing<String>,
}

impl Seed {
    pub fn from_hex(hex: impl Into<String>) -> Self {
        Self { hex: Zeroizing::new(hex.into()) }
    }

    pub fn as_hex(&self) -> &str {
        &self.hex
    }

    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>, WalletError> {
        Ok(Zeroizing::new(hex::decode(self.hex.as_str())?))
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// Unprotected seed store scoped by environment and active network.
///
/// Keys use display labels: `Development.Local Playground.MNEMONIC_SEED`.
pub struct MnemonicStorage {
    storage: Arc<dyn StorageRepository>,
    network: Arc<NetworkPersistence>,
}

impl MnemonicStorage {
    pub fn new(storage: Arc<dyn StorageRepository>, network: Arc<NetworkPersistence>) -> Self {
        Self { storage, network }
    }

    pub fn key_for(&self, network: EnvironmentNetwork) -> String {
        format!(
            "{}.{}.{}",
            self.network.environment().name,
            network,
            MNEMONIC_SEED_KEY_SUFFIX
        )
    }

    async fn key(&self) -> Result<String, WalletError> {
        let network = self.network.get().await?;
        Ok(self.key_for(network))
    }

    /// True iff a seed is stored for the active network
    pub async fn has(&self) -> Result<bool, WalletError> {
        let key = self.key().await?;
        Ok(self.storage.get_item(&key).await?.is_some())
    }

    /// Derive the seed from mnemonic words and persist it as hex
    pub async fn set(&self, words: &[String]) -> Result<(), WalletError> {
        if words.is_empty() {
            return Err(WalletError::validation("Mnemonic cannot be empty"));
        }
        let seed = mnemonic_to_seed(words);
        let encoded = Zeroizing::new(hex::encode(&seed[..]));
        let key = self.key().await?;
        self.storage.set_item(&key, &encoded).await?;
        log::info!("Stored mnemonic seed for {}", key);
        Ok(())
    }

    pub async fn get(&self) -> Result<Seed, WalletError> {
        let key = self.key().await?;
        match self.storage.get_item(&key).await? {
            Some(hex) => Ok(Seed::from_hex(hex)),
            None => Err(WalletError::no_seed_stored(key)),
        }
    }

    pub async fn clear(&self) -> Result<(), WalletError> {
        let key = self.key().await?;
        self.storage.remove_item(&key).await?;
        log::info!("Cleared mnemonic seed for {}", key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Environment;
    use crate::infrastructure::platform::MemoryStorage;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const LOCAL_SEED: &str = "408b285c123836004f4b8842c89324c1f01382450c0d439af345ba7fc49acf705489c6fc77dbd4e3dc1dd8cc6bc9f043db8ada1e243c4a0eafb290d399480840";
    const VOID_SEED: &str = "b873212f885ccffbf4692afcb84bc2e55886de2dfa07d90f5c3c239abc31c0a6ce047e30fd8bf6a281e71389aa82d73df74c7bbfb3b06b4639a5cee775cccd3c";

    /// Counts reads on top of an in-memory store
    #[derive(Default)]
    struct CountingStorage {
        inner: MemoryStorage,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl StorageRepository for CountingStorage {
        async fn get_item(&self, key: &str) -> Result<Option<String>, WalletError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_item(key).await
        }

        async fn set_item(&self, key: &str, value: &str) -> Result<(), WalletError> {
            self.inner.set_item(key, value).await
        }

        async fn remove_item(&self, key: &str) -> Result<(), WalletError> {
            self.inner.remove_item(key).await
        }
    }

    fn words(phrase: &str) -> Vec<String> {
        phrase.split_whitespace().map(|w| w.to_string()).collect()
    }

    fn abandon_art() -> Vec<String> {
        let mut words = vec!["abandon".to_string(); 23];
        words.push("art".to_string());
        words
    }

    fn store(storage: Arc<dyn StorageRepository>) -> (MnemonicStorage, Arc<NetworkPersistence>) {
        let network = Arc::new(NetworkPersistence::new(storage.clone(), Environment::development()));
        (MnemonicStorage::new(storage, network.clone()), network)
    }

    #[tokio::test]
    async fn test_set_uses_scoped_key() {
        let storage = Arc::new(MemoryStorage::new());
        let (mnemonic, _) = store(storage.clone());

        mnemonic.set(&abandon_art()).await.expect("Failed to store seed");
        assert_eq!(
            storage.get_item("Development.Local Playground.MNEMONIC_SEED").await.expect("read"),
            Some(LOCAL_SEED.to_string())
        );
    }

    #[tokio::test]
    async fn test_networks_do_not_collide() {
        let storage = Arc::new(MemoryStorage::new());
        let (mnemonic, network) = store(storage.clone());
        mnemonic.set(&abandon_art()).await.expect("Failed to store seed");

        network.set(EnvironmentNetwork::RemotePlayground).await.expect("Failed to switch network");
        assert!(!mnemonic.has().await.expect("Failed to check seed"));

        let void = words("void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold");
        mnemonic.set(&void).await.expect("Failed to store seed");
        assert_eq!(
            storage.get_item("Development.Remote Playground.MNEMONIC_SEED").await.expect("read"),
            Some(VOID_SEED.to_string())
        );
        assert_eq!(
            storage.get_item("Development.Local Playground.MNEMONIC_SEED").await.expect("read"),
            Some(LOCAL_SEED.to_string())
        );
    }

    #[tokio::test]
    async fn test_get_without_seed_fails() {
        let (mnemonic, _) = store(Arc::new(MemoryStorage::new()));
        let err = mnemonic.get().await.expect_err("Missing seed must fail");
        assert!(matches!(err, WalletError::NoSeedStored(_)));
        assert!(err.to_string().contains("without having any seed stored"));
    }

    #[tokio::test]
    async fn test_get_returns_stored_seed() {
        let (mnemonic, _) = store(Arc::new(MemoryStorage::new()));
        mnemonic.set(&abandon_art()).await.expect("Failed to store seed");
        let seed = mnemonic.get().await.expect("Failed to read seed");
        assert_eq!(seed.as_hex(), LOCAL_SEED);
        assert_eq!(seed.to_bytes().expect("Failed to decode seed").len(), 64);
    }

    #[tokio::test]
    async fn test_has_reads_network_then_seed() {
        let storage = Arc::new(CountingStorage::default());
        let (mnemonic, _) = store(storage.clone());

        assert!(!mnemonic.has().await.expect("Failed to check seed"));
        assert_eq!(storage.reads.load(Ordering::SeqCst), 2);

        mnemonic.set(&abandon_art()).await.expect("Failed to store seed");
        assert!(mnemonic.has().await.expect("Failed to check seed"));
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let (mnemonic, _) = store(Arc::new(MemoryStorage::new()));
        mnemonic.set(&abandon_art()).await.expect("Failed to store seed");
        mnemonic.clear().await.expect("Failed to clear seed");
        mnemonic.clear().await.expect("Clearing twice must succeed");
        assert!(!mnemonic.has().await.expect("Failed to check seed"));
    }

    #[tokio::test]
    async fn test_rejects_empty_mnemonic() {
        let (mnemonic, _) = store(Arc::new(MemoryStorage::new()));
        assert!(matches!(mnemonic.set(&[]).await, Err(WalletError::Validation(_))));
    }

    fn network_strategy() -> impl Strategy<Value = EnvironmentNetwork> {
        prop::sample::select(EnvironmentNetwork::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_keys_are_distinct_per_network(a in network_strategy(), b in network_strategy()) {
            let (mnemonic, _) = store(Arc::new(MemoryStorage::new()));
            let key_a = mnemonic.key_for(a);
            let key_b = mnemonic.key_for(b);
            prop_assert_eq!(a == b, key_a == key_b);
            prop_assert!(key_a.starts_with("Development."));
            prop_assert!(key_a.ends_with(".MNEMONIC_SEED"));
        }
    }
}
