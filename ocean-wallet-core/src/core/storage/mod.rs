//! Seed storage
//!
//! Network-scoped seed stores on top of the key-value storage contract:
//! the active network marker, the unprotected seed store and the
//! passcode-protected one.

pub mod network_persistence;
pub mod mnemonic_storage;
pub mod encrypted_mnemonic_storage;

pub use network_persistence::*;
pub use mnemonic_storage::*;
pub use encrypted_mnemonic_storage::*;
