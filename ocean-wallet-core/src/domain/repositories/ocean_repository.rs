//! Remote blockchain API contract
//!
//! The client is a shared, reentrant read path: the ocean interface, the stats
//! provider and the token store all hold the same instance.

use crate::shared::error::WalletError;
use crate::shared::types::{AddressToken, StatsData, TransactionRecord};
use async_trait::async_trait;

#[async_trait]
pub trait OceanApi: Send + Sync {
    /// Submit a raw transaction hex, returning the transaction id
    async fn send_raw_transaction(&self, hex: &str) -> Result<String, WalletError>;

    /// Look up an indexed transaction; fails until the transaction is mined
    async fn get_transaction(&self, txid: &str) -> Result<TransactionRecord, WalletError>;

    /// Chain statistics
    async fn get_stats(&self) -> Result<StatsData, WalletError>;

    /// Token balances held by an address
    async fn list_address_tokens(&self, address: &str) -> Result<Vec<AddressToken>, WalletError>;
}
