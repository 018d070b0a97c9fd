//! Runtime configuration from the process environment and `.env`

use dotenv::dotenv;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

use crate::domain::entities::{get_environment, Environment, EnvironmentNetwork};
use crate::infrastructure::platform::FileStorage;
use crate::shared::error::WalletError;
use crate::shared::utils::normalize_url;

pub const RELEASE_CHANNEL_VAR: &str = "WALLET_CORE_RELEASE_CHANNEL";
pub const DEFAULT_NETWORK_VAR: &str = "WALLET_CORE_DEFAULT_NETWORK";
pub const OCEAN_URL_VAR: &str = "WALLET_CORE_OCEAN_URL";
pub const STORAGE_DIR_VAR: &str = "WALLET_CORE_STORAGE_DIR";
pub const WALLET_ADDRESS_VAR: &str = "WALLET_CORE_WALLET_ADDRESS";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WalletConfig {
    pub release_channel: Option<String>,
    pub environment: Environment,
    /// Network to select when none is persisted yet
    pub default_network: Option<EnvironmentNetwork>,
    /// Overrides the network's default Ocean endpoint
    pub ocean_url: Option<String>,
    pub storage_dir: PathBuf,
    pub wallet_address: Option<String>,
}

impl WalletConfig {
    /// Load `.env` if present, then read `WALLET_CORE_*` variables
    pub fn from_env() -> Result<Self, WalletError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, WalletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let release_channel = read(RELEASE_CHANNEL_VAR);
        let environment = get_environment(release_channel.as_deref());

        let default_network = match read(DEFAULT_NETWORK_VAR) {
            Some(value) => {
                let network = value.parse::<EnvironmentNetwork>()
                    .map_err(|e| WalletError::config(format!("{}: {}", DEFAULT_NETWORK_VAR, e.message())))?;
                if !environment.supports(network) {
                    return Err(WalletError::config(format!(
                        "{}: {} is not available in {}",
                        DEFAULT_NETWORK_VAR, network, environment.name
                    )));
                }
                Some(network)
            }
            None => None,
        };

        let ocean_url = read(OCEAN_URL_VAR).map(|url| normalize_url(&url));
        if let Some(url) = &ocean_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(WalletError::config(format!("{}: invalid URL {}", OCEAN_URL_VAR, url)));
            }
        }

        Ok(Self {
            release_channel,
            environment,
            default_network,
            ocean_url,
            storage_dir: read(STORAGE_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(FileStorage::default_dir),
            wallet_address: read(WALLET_ADDRESS_VAR),
        })
    }

    pub fn ocean_url_for(&self, network: EnvironmentNetwork) -> String {
        self.ocean_url
            .clone()
            .unwrap_or_else(|| network.default_ocean_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::EnvironmentName;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WalletConfig::from_lookup(lookup(&[])).expect("Failed to load config");
        assert_eq!(config.environment.name, EnvironmentName::Development);
        assert_eq!(config.default_network, None);
        assert_eq!(config.wallet_address, None);
        assert_eq!(config.storage_dir, FileStorage::default_dir());
        assert_eq!(
            config.ocean_url_for(EnvironmentNetwork::LocalPlayground),
            "http://localhost:19553"
        );
    }

    #[test]
    fn test_overrides() {
        let config = WalletConfig::from_lookup(lookup(&[
            (RELEASE_CHANNEL_VAR, "prod"),
            (DEFAULT_NETWORK_VAR, "TestNet"),
            (OCEAN_URL_VAR, "https://ocean.example.com/"),
            (STORAGE_DIR_VAR, "/tmp/ocean-wallet"),
            (WALLET_ADDRESS_VAR, "tf1qaddress"),
        ]))
        .expect("Failed to load config");

        assert_eq!(config.environment.name, EnvironmentName::Production);
        assert_eq!(config.default_network, Some(EnvironmentNetwork::TestNet));
        assert_eq!(config.ocean_url_for(EnvironmentNetwork::TestNet), "https://ocean.example.com");
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/ocean-wallet"));
        assert_eq!(config.wallet_address.as_deref(), Some("tf1qaddress"));
    }

    #[test]
    fn test_network_accepts_display_name() {
        let config = WalletConfig::from_lookup(lookup(&[(DEFAULT_NETWORK_VAR, "Remote Playground")]))
            .expect("Failed to load config");
        assert_eq!(config.default_network, Some(EnvironmentNetwork::RemotePlayground));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            WalletConfig::from_lookup(lookup(&[(DEFAULT_NETWORK_VAR, "Regtest")])),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(
            WalletConfig::from_lookup(lookup(&[
                (RELEASE_CHANNEL_VAR, "prod"),
                (DEFAULT_NETWORK_VAR, "Local Playground"),
            ])),
            Err(WalletError::Config(_))
        ));
        assert!(matches!(
            WalletConfig::from_lookup(lookup(&[(OCEAN_URL_VAR, "ocean.example.com")])),
            Err(WalletError::Config(_))
        ));
    }
}
