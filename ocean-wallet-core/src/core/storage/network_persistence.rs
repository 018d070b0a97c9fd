use std::sync::Arc;

use crate::domain::entities::{Environment, EnvironmentNetwork};
use crate::domain::repositories::StorageRepository;
use crate::shared::constants::NETWORK_KEY_SUFFIX;
use crate::shared::error::WalletError;

/// Active network marker, stored per environment as the network display name
pub struct NetworkPersistence {
    storage: Arc<dyn StorageRepository>,
    environment: Environment,
}

impl NetworkPersistence {
    pub fn new(storage: Arc<dyn StorageRepository>, environment: Environment) -> Self {
        Self { storage, environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn key(&self) -> String {
        format!("{}.{}", self.environment.name, NETWORK_KEY_SUFFIX)
    }

    /// Active network; unset or unknown values fall back to the environment default
    pub async fn get(&self) -> Result<EnvironmentNetwork, WalletError> {
        let stored = self.storage.get_item(&self.key()).await?;
        let network = match stored {
            Some(value) => match value.parse::<EnvironmentNetwork>() {
                Ok(network) if self.environment.supports(network) => network,
                _ => {
                    log::warn!("Ignoring stored network '{}' for {}", value, self.environment.name);
                    self.environment.default_network()
                }
            },
            None => self.environment.default_network(),
        };
        Ok(network)
    }

    pub async fn set(&self, network: EnvironmentNetwork) -> Result<(), WalletError> {
        if !self.environment.supports(network) {
            return Err(WalletError::validation(format!(
                "Network {} is not available in {}",
                network, self.environment.name
            )));
        }
        log::info!("Switching {} to {}", self.environment.name, network);
        self.storage.set_item(&self.key(), network.as_str()).await
    }
}
