//! Ocean Wallet Core
//!
//! Wallet services for the DeFiChain Ocean network: seed storage, HD key
//! derivation, notification dispatch and the broadcast-confirm pipeline
//! for signed transactions.
//!
//! ## Architecture
//!
//! - **Core**: Crypto, seed storage, notifications, transactions, stats
//! - **Domain**: Entities and repository contracts
//! - **Shared**: Errors, constants, common types and utilities
//! - **Infrastructure**: Storage backends, Ocean HTTP client, configuration
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ocean_wallet_core::{init, init_wallet_core, SignedTransaction};
//!
//! # async fn run() -> Result<(), ocean_wallet_core::WalletError> {
//! init()?;
//! let core = init_wallet_core().await?;
//! core.start().await?;
//!
//! let tx = SignedTransaction::from_hex("txid", "0400000001")?;
//! core.ocean().enqueue(tx).await;
//!
//! core.shutdown().await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

use crate::core::crypto::MnemonicHdNodeProvider;
use crate::core::notifications::{NotificationPersistence, NotificationService};
use crate::core::stats::StatsProvider;
use crate::core::storage::{EncryptedMnemonicStorage, MnemonicStorage, NetworkPersistence};
use crate::core::transactions::{OceanInterface, OceanSettings};
use crate::core::wallet::TokenStore;
use crate::domain::entities::{Environment, EnvironmentNetwork};
use crate::domain::repositories::{NotificationPlatform, OceanApi, StorageRepository};
use crate::infrastructure::{FileStorage, LogNotificationPlatform, WalletConfig, WhaleApiClient};

pub use shared::error::WalletError;
pub use shared::types::{SignedTransaction, TransactionRecord};

/// Initialize logging; `RUST_LOG` overrides the default `info` level.
///
/// Safe to call more than once.
pub fn init() -> Result<(), WalletError> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
    Ok(())
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize the wallet core with configuration from .env or safe defaults
pub async fn init_wallet_core() -> Result<WalletCore, WalletError> {
    let config = WalletConfig::from_env()?;
    log::info!("{} v{} starting in {}", NAME, VERSION, config.environment.name);

    let storage: Arc<dyn StorageRepository> = Arc::new(FileStorage::new(config.storage_dir.clone()));
    let platform: Arc<dyn NotificationPlatform> = Arc::new(LogNotificationPlatform::new());
    WalletCore::new(&config, storage, platform, |network| {
        let client = WhaleApiClient::new(&config.ocean_url_for(network), network)?;
        Ok(Arc::new(client) as Arc<dyn OceanApi>)
    })
    .await
}

/// Main wallet core struct that provides access to all functionality
pub struct WalletCore {
    environment: Environment,
    network: EnvironmentNetwork,
    wallet_address: Option<String>,
    network_persistence: Arc<NetworkPersistence>,
    mnemonic_storage: MnemonicStorage,
    encrypted_storage: EncryptedMnemonicStorage,
    notifications: Arc<NotificationService>,
    ocean: Arc<OceanInterface>,
    stats: Arc<StatsProvider>,
    tokens: Arc<TokenStore>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl WalletCore {
    /// Wire the services for the active network.
    ///
    /// The configured default network is persisted only when nothing is
    /// stored yet; `connect` builds the Ocean client for the resolved network.
    pub async fn new<F>(
        config: &WalletConfig,
        storage: Arc<dyn StorageRepository>,
        platform: Arc<dyn NotificationPlatform>,
        connect: F,
    ) -> Result<Self, WalletError>
    where
        F: FnOnce(EnvironmentNetwork) -> Result<Arc<dyn OceanApi>, WalletError>,
    {
        let environment = config.environment.clone();
        let network_persistence = Arc::new(NetworkPersistence::new(storage.clone(), environment.clone()));

        if let Some(network) = config.default_network {
            if !storage.exists(&network_persistence.key()).await? {
                network_persistence.set(network).await?;
            }
        }
        let network = network_persistence.get().await?;
        log::info!("Using {} on {}", network, environment.name);

        let client = connect(network)?;
        let notifications = Arc::new(NotificationService::new(
            platform,
            NotificationPersistence::new(storage.clone()),
        ));
        let tokens = Arc::new(TokenStore::new(client.clone()));
        let ocean = Arc::new(OceanInterface::new(
            client.clone(),
            notifications.clone(),
            tokens.clone(),
            network,
            OceanSettings::for_environment(&environment),
        ));

        Ok(Self {
            mnemonic_storage: MnemonicStorage::new(storage.clone(), network_persistence.clone()),
            encrypted_storage: EncryptedMnemonicStorage::new(storage, network_persistence.clone()),
            stats: Arc::new(StatsProvider::new(client, network)),
            environment,
            network,
            wallet_address: config.wallet_address.clone(),
            network_persistence,
            notifications,
            ocean,
            tokens,
            tasks: Mutex::new(Vec::new()),
        })
    }

    /// Register notifications and spawn the orchestrator and stats loops.
    ///
    /// A failed registration leaves notifications suppressed; the loops
    /// start regardless.
    pub async fn start(&self) -> Result<(), WalletError> {
        if let Err(e) = self.notifications.register().await {
            log::error!("Notification registration failed: {}", e);
        }
        self.ocean.set_address(self.wallet_address.clone()).await;

        let mut tasks = self.tasks.lock().await;
        if !tasks.is_empty() {
            log::warn!("Wallet core already started");
            return Ok(());
        }
        tasks.push(self.ocean.clone().spawn());
        if let Some(handle) = self.stats.clone().start() {
            tasks.push(handle);
        }
        Ok(())
    }

    /// Cancel the background loops and wait for them to finish
    pub async fn shutdown(&self) -> Result<(), WalletError> {
        self.ocean.shutdown();
        self.stats.stop();

        let handles: Vec<JoinHandle<()>> = self.tasks.lock().await.drain(..).collect();
        for handle in handles {
            handle.await?;
        }
        log::info!("Wallet core stopped");
        Ok(())
    }

    /// Key provider for the seed stored on the active network
    pub async fn hd_node_provider(&self) -> Result<MnemonicHdNodeProvider, WalletError> {
        let seed = self.mnemonic_storage.get().await?;
        MnemonicHdNodeProvider::from_seed(&seed.to_bytes()?)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn network(&self) -> EnvironmentNetwork {
        self.network
    }

    pub fn network_persistence(&self) -> &NetworkPersistence {
        &self.network_persistence
    }

    pub fn mnemonic_storage(&self) -> &MnemonicStorage {
        &self.mnemonic_storage
    }

    pub fn encrypted_storage(&self) -> &EncryptedMnemonicStorage {
        &self.encrypted_storage
    }

    pub fn notifications(&self) -> &Arc<NotificationService> {
        &self.notifications
    }

    pub fn ocean(&self) -> &Arc<OceanInterface> {
        &self.ocean
    }

    pub fn stats(&self) -> &Arc<StatsProvider> {
        &self.stats
    }

    pub fn tokens(&self) -> &Arc<TokenStore> {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::crypto::WalletHdNodeProvider;
    use crate::core::crypto::WalletHdNode;
    use crate::domain::entities::{
        EnvironmentName, NotificationContent, OceanEventKind, PermissionStatus, PlatformOs,
    };
    use crate::domain::repositories::ocean_repository::fake::FakeOceanApi;
    use crate::infrastructure::config::DEFAULT_NETWORK_VAR;
    use crate::infrastructure::platform::MemoryStorage;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> WalletConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WalletConfig::from_lookup(move |key| map.get(key).cloned()).expect("Failed to load config")
    }

    /// Platform whose permission lookup always fails
    struct UnavailablePlatform;

    #[async_trait::async_trait]
    impl NotificationPlatform for UnavailablePlatform {
        fn os(&self) -> PlatformOs {
            PlatformOs::Ios
        }

        async fn get_permission_status(&self) -> Result<PermissionStatus, WalletError> {
            Err(WalletError::notification("center unavailable"))
        }

        async fn request_permission(&self) -> Result<PermissionStatus, WalletError> {
            Err(WalletError::notification("center unavailable"))
        }

        async fn set_notification_channel(&self, _name: &str) -> Result<(), WalletError> {
            Ok(())
        }

        async fn schedule_notification(&self, _content: NotificationContent) -> Result<(), WalletError> {
            Err(WalletError::notification("center unavailable"))
        }
    }

    async fn wallet_core(
        config: &WalletConfig,
        storage: Arc<dyn StorageRepository>,
    ) -> (WalletCore, Arc<FakeOceanApi>) {
        wallet_core_with_platform(config, storage, Arc::new(LogNotificationPlatform::new())).await
    }

    async fn wallet_core_with_platform(
        config: &WalletConfig,
        storage: Arc<dyn StorageRepository>,
        platform: Arc<dyn NotificationPlatform>,
    ) -> (WalletCore, Arc<FakeOceanApi>) {
        let api = Arc::new(FakeOceanApi::new(Arc::new(std::sync::Mutex::new(Vec::new()))));
        let client = api.clone();
        let core = WalletCore::new(config, storage, platform, move |_| {
            Ok(client as Arc<dyn OceanApi>)
        })
        .await
        .expect("Failed to create wallet core");
        (core, api)
    }

    #[test]
    fn test_init_is_idempotent() {
        init().expect("Failed to init logging");
        init().expect("Failed to init logging twice");
    }

    #[tokio::test]
    async fn test_default_network_persisted_once() {
        let storage: Arc<dyn StorageRepository> = Arc::new(MemoryStorage::new());

        let (core, _) = wallet_core(&config(&[(DEFAULT_NETWORK_VAR, "TestNet")]), storage.clone()).await;
        assert_eq!(core.environment().name, EnvironmentName::Development);
        assert_eq!(core.network(), EnvironmentNetwork::TestNet);

        core.network_persistence()
            .set(EnvironmentNetwork::RemotePlayground)
            .await
            .expect("Failed to switch network");
        let (core, _) = wallet_core(&config(&[(DEFAULT_NETWORK_VAR, "TestNet")]), storage).await;
        assert_eq!(core.network(), EnvironmentNetwork::RemotePlayground);
    }

    #[tokio::test]
    async fn test_hd_node_provider_requires_seed() {
        let (core, _) = wallet_core(&config(&[]), Arc::new(MemoryStorage::new())).await;
        assert!(matches!(core.hd_node_provider().await, Err(WalletError::NoSeedStored(_))));

        let mut words = vec!["abandon".to_string(); 23];
        words.push("art".to_string());
        core.mnemonic_storage().set(&words).await.expect("Failed to store seed");

        let provider = core.hd_node_provider().await.expect("Failed to build provider");
        let public_key = provider.derive("0").public_key().await.expect("Failed to derive");
        assert_eq!(
            hex::encode(public_key),
            "03f85401f5aa4e9ed831120a22b8835137404755b30c59109c18c706b2549f7951"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_process_and_shutdown() {
        let (core, api) = wallet_core(&config(&[]), Arc::new(MemoryStorage::new())).await;
        core.start().await.expect("Failed to start");
        core.start().await.expect("Second start should be a no-op");

        let mut events = core.ocean().subscribe();
        let tx = SignedTransaction::from_hex("ab".repeat(32), "0400000001")
            .expect("Failed to parse transaction");
        let job_id = core.ocean().enqueue(tx).await;

        loop {
            let event = events.recv().await.expect("Event channel closed");
            if event.job_id == job_id && matches!(event.kind, OceanEventKind::Dequeued) {
                break;
            }
        }
        assert_eq!(core.ocean().queue_len().await, 0);
        assert!(api.send_calls.load(std::sync::atomic::Ordering::SeqCst) >= 1);

        core.shutdown().await.expect("Failed to shut down");
        assert!(core.ocean().is_shutdown());
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_survives_notification_failure() {
        let (core, api) = wallet_core_with_platform(
            &config(&[]),
            Arc::new(MemoryStorage::new()),
            Arc::new(UnavailablePlatform),
        )
        .await;
        core.start().await.expect("Start must not fail on notification errors");
        assert_eq!(core.notifications().permission_status().await, None);

        let mut events = core.ocean().subscribe();
        let tx = SignedTransaction::from_hex("cd".repeat(32), "0400000002")
            .expect("Failed to parse transaction");
        let job_id = core.ocean().enqueue(tx).await;

        let mut confirmed = false;
        loop {
            let event = events.recv().await.expect("Event channel closed");
            if event.job_id != job_id {
                continue;
            }
            match event.kind {
                OceanEventKind::Confirmed(_) => confirmed = true,
                OceanEventKind::Dequeued => break,
                _ => {}
            }
        }
        assert!(confirmed);
        assert_eq!(api.send_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
        assert_eq!(core.ocean().queue_len().await, 0);

        core.shutdown().await.expect("Failed to shut down");
    }
}
