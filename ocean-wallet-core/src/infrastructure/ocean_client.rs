//! HTTP client for the Ocean (whale) REST API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::entities::EnvironmentNetwork;
use crate::domain::repositories::OceanApi;
use crate::shared::constants::{HTTP_TIMEOUT_SECS, OCEAN_API_VERSION, TOKEN_PAGE_SIZE};
use crate::shared::error::WalletError;
use crate::shared::types::{AddressToken, StatsData, TransactionRecord};
use crate::shared::utils::normalize_url;

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: u16,
    #[serde(default, rename = "type")]
    error_type: String,
    #[serde(default)]
    message: String,
}

pub struct WhaleApiClient {
    client: Client,
    url: String,
    network: String,
}

impl WhaleApiClient {
    pub fn new(url: &str, network: EnvironmentNetwork) -> Result<Self, WalletError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .map_err(|e| WalletError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            url: normalize_url(url),
            network: network.ocean_network_name().to_string(),
        })
    }

    pub fn for_network(network: EnvironmentNetwork) -> Result<Self, WalletError> {
        Self::new(network.default_ocean_url(), network)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}/{}", self.url, OCEAN_API_VERSION, self.network, path.trim_start_matches('/'))
    }

    async fn parse<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, WalletError> {
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let message = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(err) => format!("{} - {} ({})", err.error.code, err.error.message, err.error.error_type),
                Err(_) => format!("{} - {}", status.as_u16(), body),
            };
            return Err(WalletError::network(message));
        }
        let parsed: ApiResponse<T> = serde_json::from_str(&body)
            .map_err(|e| WalletError::network(format!("Invalid response: {}", e)))?;
        Ok(parsed.data)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, WalletError> {
        let resp = self.client.get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| WalletError::network(format!("Request to {} failed: {}", path, e)))?;
        Self::parse(resp).await
    }
}

#[async_trait]
impl OceanApi for WhaleApiClient {
    async fn send_raw_transaction(&self, hex: &str) -> Result<String, WalletError> {
        let resp = self.client.post(self.endpoint("rawtx/send"))
            .json(&json!({ "hex": hex }))
            .send()
            .await
            .map_err(|e| WalletError::submission(format!("Failed to send transaction: {}", e)))?;
        Self::parse(resp)
            .await
            .map_err(|e| WalletError::submission(e.message().to_string()))
    }

    async fn get_transaction(&self, txid: &str) -> Result<TransactionRecord, WalletError> {
        if txid.is_empty() {
            return Err(WalletError::validation("Transaction id cannot be empty"));
        }
        self.get(&format!("transactions/{}", txid)).await
    }

    async fn get_stats(&self) -> Result<StatsData, WalletError> {
        self.get("stats").await
    }

    async fn list_address_tokens(&self, address: &str) -> Result<Vec<AddressToken>, WalletError> {
        if address.is_empty() {
            return Err(WalletError::validation("Address cannot be empty"));
        }
        self.get(&format!("address/{}/tokens?size={}", address, TOKEN_PAGE_SIZE)).await
    }
}
