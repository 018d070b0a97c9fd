use serde::{Deserialize, Serialize};

use crate::shared::error::WalletError;

// Basic types for wallet operations
pub type Address = String;
pub type TransactionId = String;
pub type BlockHeight = u64;
pub type Amount = String;

/// A signed, serialised transaction ready to be broadcast.
///
/// The signing flow produces it; the ocean interface consumes it exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction {
    txid: TransactionId,
    raw: Vec<u8>,
}

impl SignedTransaction {
    pub fn new(txid: impl Into<TransactionId>, raw: Vec<u8>) -> Result<Self, WalletError> {
        let txid = txid.into();
        if txid.trim().is_empty() {
            return Err(WalletError::validation("Transaction id cannot be empty"));
        }
        if raw.is_empty() {
            return Err(WalletError::validation("Raw transaction cannot be empty"));
        }
        Ok(Self { txid, raw })
    }

    pub fn from_hex(txid: impl Into<TransactionId>, hex_tx: &str) -> Result<Self, WalletError> {
        let raw = crate::shared::utils::hex_to_bytes(hex_tx)?;
        Self::new(txid, raw)
    }

    pub fn txid(&self) -> &str {
        &self.txid
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.raw)
    }
}

/// Transaction as indexed by the remote API once it is included in a block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub txid: TransactionId,
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub v_size: u64,
    #[serde(default)]
    pub weight: u64,
    #[serde(default)]
    pub lock_time: u64,
    #[serde(default)]
    pub vin_count: u32,
    #[serde(default)]
    pub vout_count: u32,
    #[serde(default)]
    pub total_vout_value: Amount,
    pub block: TransactionBlock,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlock {
    pub hash: String,
    pub height: BlockHeight,
    #[serde(default)]
    pub time: i64,
    #[serde(default)]
    pub median_time: i64,
}

/// Chain statistics snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsData {
    pub count: StatsCount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsCount {
    pub blocks: BlockHeight,
    #[serde(default)]
    pub masternodes: u64,
    #[serde(default)]
    pub tokens: u64,
    #[serde(default)]
    pub prices: u64,
}

/// Token balance held by an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressToken {
    pub id: String,
    pub amount: Amount,
    pub symbol: String,
    #[serde(default)]
    pub display_symbol: String,
    #[serde(default)]
    pub symbol_key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "isDAT")]
    pub is_dat: bool,
    #[serde(default, rename = "isLPS")]
    pub is_lps: bool,
    #[serde(default)]
    pub is_loan_token: bool,
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
