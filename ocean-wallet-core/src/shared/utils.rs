//! Utility functions for the wallet core
//!
//! This module contains common utility functions used throughout the wallet core.

use crate::shared::error::WalletError;
use rand_core::OsRng;
use rand_core::RngCore;

/// Generate a unique ID
pub fn generate_id() -> uuid::Uuid {
    uuid::Uuid::new_v4()
}

/// Convert hex string to bytes
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, WalletError> {
    let hex = hex.trim_start_matches("0x");
    hex::decode(hex)
        .map_err(|e| WalletError::validation(format!("Invalid hex string: {}", e)))
}

/// Calculate SHA256 hash
pub fn sha256_hash(data: &[u8]) -> Vec<u8> {
    use sha2::{Sha256, Digest};
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Generate cryptographically secure random bytes
pub fn generate_secure_random_bytes(length: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; length];
    let mut rng = OsRng;
    rng.fill_bytes(&mut bytes);
    bytes
}

/// Trim a URL and drop its trailing slash
pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
