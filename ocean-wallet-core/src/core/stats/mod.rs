//! Chain statistics polling
//!
//! Keeps block and masternode counts fresh for the active network. Shares the
//! remote API client with the ocean interface.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::EnvironmentNetwork;
use crate::domain::repositories::OceanApi;
use crate::shared::types::BlockHeight;

/// Latest known chain state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockState {
    pub count: BlockHeight,
    pub masternode_count: u64,
    pub last_sync: Option<DateTime<Utc>>,
    pub connected: bool,
    pub is_polling: bool,
}

pub struct StatsProvider {
    client: Arc<dyn OceanApi>,
    interval: Duration,
    state: RwLock<BlockState>,
    polling: AtomicBool,
    cancel: CancellationToken,
}

impl StatsProvider {
    pub fn new(client: Arc<dyn OceanApi>, network: EnvironmentNetwork) -> Self {
        Self::with_interval(client, Duration::from_millis(network.stats_interval_ms()))
    }

    pub fn with_interval(client: Arc<dyn OceanApi>, interval: Duration) -> Self {
        Self {
            client,
            interval,
            state: RwLock::new(BlockState::default()),
            polling: AtomicBool::new(false),
            cancel: CancellationToken::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn state(&self) -> BlockState {
        self.state.read().await.clone()
    }

    /// Fetch stats once
    pub async fn refresh(&self) {
        match self.client.get_stats().await {
            Ok(stats) => {
                let mut state = self.state.write().await;
                state.count = stats.count.blocks;
                state.masternode_count = stats.count.masternodes;
                state.last_sync = Some(Utc::now());
                state.connected = true;
            }
            Err(e) => {
                let mut state = self.state.write().await;
                state.count = 0;
                state.masternode_count = 0;
                state.connected = false;
                log::error!("Failed to fetch stats: {}", e);
            }
        }
    }

    /// Poll immediately and then every interval. `None` if already polling.
    pub fn start(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if self.polling.swap(true, Ordering::SeqCst) {
            log::debug!("Stats polling already running");
            return None;
        }
        Some(tokio::spawn(async move {
            self.state.write().await.is_polling = true;
            let mut ticker = tokio::time::interval(self.interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => self.refresh().await,
                    _ = self.cancel.cancelled() => break,
                }
            }
            self.state.write().await.is_polling = false;
            self.polling.store(false, Ordering::SeqCst);
            log::info!("Stats polling stopped");
        }))
    }

    /// Stop polling for good; a stopped provider does not restart
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}
