//! Wallet notifications
//!
//! Preference persistence and the permission-gated dispatcher. The service is
//! an explicit object handed to its consumers rather than a process global.

pub mod persistence;
pub mod service;

pub use persistence::*;
pub use service::*;
