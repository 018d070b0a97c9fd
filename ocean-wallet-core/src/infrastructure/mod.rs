//! Infrastructure layer - platform-specific implementations
//!
//! Storage backends, the notification adapter, the Ocean HTTP client and
//! runtime configuration.

pub mod config;
pub mod ocean_client;
pub mod platform;

// Re-export infrastructure components
pub use config::*;
pub use ocean_client::*;
pub use platform::*;
