//! Environment and network entities
//!
//! The release channel selects an [`Environment`]; each environment offers an
//! ordered list of networks, the first being the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::constants::{
    LOCAL_PLAYGROUND_URL, OCEAN_URL, REMOTE_PLAYGROUND_URL, STATS_INTERVAL_MS,
    STATS_INTERVAL_PLAYGROUND_MS,
};
use crate::shared::error::WalletError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EnvironmentName {
    Production,
    Preview,
    Development,
}

impl EnvironmentName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentName::Production => "Production",
            EnvironmentName::Preview => "Preview",
            EnvironmentName::Development => "Development",
        }
    }
}

impl fmt::Display for EnvironmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EnvironmentNetwork {
    MainNet,
    TestNet,
    RemotePlayground,
    LocalPlayground,
}

impl EnvironmentNetwork {
    pub const ALL: [EnvironmentNetwork; 4] = [
        EnvironmentNetwork::MainNet,
        EnvironmentNetwork::TestNet,
        EnvironmentNetwork::RemotePlayground,
        EnvironmentNetwork::LocalPlayground,
    ];

    /// Human-readable label. Also the persisted value and part of storage keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvironmentNetwork::MainNet => "MainNet",
            EnvironmentNetwork::TestNet => "TestNet",
            EnvironmentNetwork::RemotePlayground => "Remote Playground",
            EnvironmentNetwork::LocalPlayground => "Local Playground",
        }
    }

    /// Stable identifier, used in explorer query strings.
    pub fn identifier(&self) -> &'static str {
        match self {
            EnvironmentNetwork::MainNet => "MainNet",
            EnvironmentNetwork::TestNet => "TestNet",
            EnvironmentNetwork::RemotePlayground => "RemotePlayground",
            EnvironmentNetwork::LocalPlayground => "LocalPlayground",
        }
    }

    pub fn is_playground(&self) -> bool {
        matches!(
            self,
            EnvironmentNetwork::RemotePlayground | EnvironmentNetwork::LocalPlayground
        )
    }

    /// Network segment of the remote API path
    pub fn ocean_network_name(&self) -> &'static str {
        match self {
            EnvironmentNetwork::MainNet => "mainnet",
            EnvironmentNetwork::TestNet => "testnet",
            EnvironmentNetwork::RemotePlayground | EnvironmentNetwork::LocalPlayground => "regtest",
        }
    }

    pub fn default_ocean_url(&self) -> &'static str {
        match self {
            EnvironmentNetwork::MainNet | EnvironmentNetwork::TestNet => OCEAN_URL,
            EnvironmentNetwork::RemotePlayground => REMOTE_PLAYGROUND_URL,
            EnvironmentNetwork::LocalPlayground => LOCAL_PLAYGROUND_URL,
        }
    }

    pub fn stats_interval_ms(&self) -> u64 {
        if self.is_playground() {
            STATS_INTERVAL_PLAYGROUND_MS
        } else {
            STATS_INTERVAL_MS
        }
    }
}

impl fmt::Display for EnvironmentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnvironmentNetwork {
    type Err = WalletError;

    /// Accepts either the display label or the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        EnvironmentNetwork::ALL
            .into_iter()
            .find(|network| network.as_str() == value || network.identifier() == value)
            .ok_or_else(|| WalletError::validation(format!("Unknown network: {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub name: EnvironmentName,
    pub debug: bool,
    pub networks: Vec<EnvironmentNetwork>,
}

impl Environment {
    pub fn production() -> Self {
        Self {
            name: EnvironmentName::Production,
            debug: false,
            networks: vec![EnvironmentNetwork::MainNet, EnvironmentNetwork::TestNet],
        }
    }

    pub fn preview() -> Self {
        Self {
            name: EnvironmentName::Preview,
            debug: true,
            networks: vec![
                EnvironmentNetwork::TestNet,
                EnvironmentNetwork::MainNet,
                EnvironmentNetwork::RemotePlayground,
                EnvironmentNetwork::LocalPlayground,
            ],
        }
    }

    pub fn development() -> Self {
        Self {
            name: EnvironmentName::Development,
            debug: true,
            networks: vec![
                EnvironmentNetwork::LocalPlayground,
                EnvironmentNetwork::RemotePlayground,
                EnvironmentNetwork::TestNet,
                EnvironmentNetwork::MainNet,
            ],
        }
    }

    pub fn default_network(&self) -> EnvironmentNetwork {
        self.networks
            .first()
            .copied()
            .unwrap_or(EnvironmentNetwork::MainNet)
    }

    pub fn supports(&self, network: EnvironmentNetwork) -> bool {
        self.networks.contains(&network)
    }
}

/// Resolve the environment for a release channel; anything unrecognised is development.
pub fn get_environment(release_channel: Option<&str>) -> Environment {
    match release_channel.map(str::trim) {
        Some("prod") => Environment::production(),
        Some(channel) if channel == "preview" || channel.starts_with("pr-preview-") => {
            Environment::preview()
        }
        _ => Environment::development(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_channel_selection() {
        assert_eq!(get_environment(Some("prod")).name, EnvironmentName::Production);
        assert_eq!(get_environment(Some("preview")).name, EnvironmentName::Preview);
        assert_eq!(get_environment(Some("pr-preview-512")).name, EnvironmentName::Preview);
        assert_eq!(get_environment(Some("default")).name, EnvironmentName::Development);
        assert_eq!(get_environment(None).name, EnvironmentName::Development);
    }

    #[test]
    fn test_debug_flags() {
        assert!(!Environment::production().debug);
        assert!(Environment::preview().debug);
        assert!(Environment::development().debug);
    }

    #[test]
    fn test_default_networks() {
        assert_eq!(Environment::development().default_network(), EnvironmentNetwork::LocalPlayground);
        assert_eq!(Environment::production().default_network(), EnvironmentNetwork::MainNet);
        assert!(!Environment::production().supports(EnvironmentNetwork::LocalPlayground));
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!(
            "Local Playground".parse::<EnvironmentNetwork>().expect("Failed to parse label"),
            EnvironmentNetwork::LocalPlayground
        );
        assert_eq!(
            "RemotePlayground".parse::<EnvironmentNetwork>().expect("Failed to parse identifier"),
            EnvironmentNetwork::RemotePlayground
        );
        assert!("Moon Net".parse::<EnvironmentNetwork>().is_err());
    }

    #[test]
    fn test_playground_properties() {
        assert!(EnvironmentNetwork::LocalPlayground.is_playground());
        assert!(!EnvironmentNetwork::TestNet.is_playground());
        assert_eq!(EnvironmentNetwork::RemotePlayground.ocean_network_name(), "regtest");
        assert_eq!(EnvironmentNetwork::LocalPlayground.stats_interval_ms(), 3_000);
        assert_eq!(EnvironmentNetwork::MainNet.stats_interval_ms(), 30_000);
    }
}
