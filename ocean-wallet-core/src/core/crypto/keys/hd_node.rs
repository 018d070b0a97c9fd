//! Hierarchical deterministic node contracts
//!
//! Key accessors are async so alternate providers can back them with
//! hardware or encrypted-at-rest key material.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::shared::error::WalletError;

#[async_trait]
pub trait WalletHdNode: Send + Sync {
    /// Compressed secp256k1 public key (33 bytes)
    async fn public_key(&self) -> Result<Vec<u8>, WalletError>;

    /// Raw 32-byte private key
    async fn private_key(&self) -> Result<Zeroizing<Vec<u8>>, WalletError>;

    /// ECDSA signature over a 32-byte hash, DER encoded
    async fn sign(&self, hash: &[u8]) -> Result<Vec<u8>, WalletError>;

    /// Verify a DER signature over a 32-byte hash
    async fn verify(&self, hash: &[u8], signature: &[u8]) -> Result<bool, WalletError>;
}

/// Derives nodes by path. Derivation is lazy; path errors surface on the
/// node's accessors.
pub trait WalletHdNodeProvider: Send + Sync {
    type Node: WalletHdNode;

    fn derive(&self, path: &str) -> Self::Node;
}
