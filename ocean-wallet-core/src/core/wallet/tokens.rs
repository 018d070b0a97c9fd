use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::repositories::OceanApi;
use crate::shared::types::AddressToken;

/// Cached token balances of the wallet address
pub struct TokenStore {
    client: Arc<dyn OceanApi>,
    tokens: RwLock<Vec<AddressToken>>,
}

impl TokenStore {
    pub fn new(client: Arc<dyn OceanApi>) -> Self {
        Self {
            client,
            tokens: RwLock::new(Vec::new()),
        }
    }

    /// Refetch tokens for the address; on failure the previous list is kept
    pub async fn refresh(&self, address: &str) {
        match self.client.list_address_tokens(address).await {
            Ok(tokens) => {
                log::debug!("Fetched {} tokens for {}", tokens.len(), address);
                *self.tokens.write().await = tokens;
            }
            Err(e) => log::error!("Failed to fetch tokens for {}: {}", address, e),
        }
    }

    pub async fn tokens(&self) -> Vec<AddressToken> {
        self.tokens.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::fake::FakeOceanApi;
    use crate::shared::error::WalletError;
    use std::sync::atomic::Ordering;
    use std::sync::Mutex;

    fn token(symbol: &str, amount: &str) -> AddressToken {
        AddressToken {
            id: "0".to_string(),
            amount: amount.to_string(),
            symbol: symbol.to_string(),
            display_symbol: symbol.to_string(),
            symbol_key: symbol.to_string(),
            name: symbol.to_string(),
            is_dat: true,
            is_lps: false,
            is_loan_token: false,
        }
    }

    #[tokio::test]
    async fn test_refresh_replaces_tokens() {
        let api = Arc::new(FakeOceanApi::new(Arc::new(Mutex::new(Vec::new()))));
        api.set_tokens(Ok(vec![token("DFI", "10.00000000")]));
        let store = TokenStore::new(api.clone());

        store.refresh("bcrt1qaddress").await;
        assert_eq!(store.tokens().await, vec![token("DFI", "10.00000000")]);
        assert_eq!(api.token_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_tokens() {
        let api = Arc::new(FakeOceanApi::new(Arc::new(Mutex::new(Vec::new()))));
        api.set_tokens(Ok(vec![token("DFI", "1.00000000")]));
        let store = TokenStore::new(api.clone());
        store.refresh("bcrt1qaddress").await;

        api.set_tokens(Err(WalletError::network("503 - unavailable")));
        store.refresh("bcrt1qaddress").await;
        assert_eq!(store.tokens().await.len(), 1);
    }
}
