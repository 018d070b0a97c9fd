//! Cryptographic functionality for the wallet core
//!
//! Key derivation from mnemonic seeds and passcode-based encryption of
//! persisted seeds. Secret material is zeroized when dropped.

pub mod keys;
pub mod encryption;

// Re-export all public items from submodules
pub use keys::*;
pub use encryption::*;
