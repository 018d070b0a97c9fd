//! Domain repositories
//!
//! This module contains the traits for the external collaborators the wallet
//! core depends on: key-value storage, the remote API and the notification
//! platform.

pub mod storage_repository;
pub mod ocean_repository;
pub mod notification_platform;

// Re-export repositories
pub use storage_repository::*;
pub use ocean_repository::*;
pub use notification_platform::*;
