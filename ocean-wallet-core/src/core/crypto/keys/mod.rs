//! Key derivation for the wallet core
//!
//! Mnemonic utilities, the HD node contracts and the mnemonic-backed provider.

pub mod hd_node;
pub mod mnemonic;
pub mod mnemonic_provider;

// Re-export all public items from submodules
pub use hd_node::*;
pub use mnemonic::*;
pub use mnemonic_provider::*;
