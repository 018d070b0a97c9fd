//! Core wallet functionality
//!
//! Key derivation and seed storage, notifications, the ocean interface
//! (broadcast and confirmation tracking), chain stats, token balances and
//! loan vault rules.

pub mod crypto;
pub mod loans;
pub mod notifications;
pub mod stats;
pub mod storage;
pub mod transactions;
pub mod wallet;
