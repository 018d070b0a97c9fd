//! Platform-specific implementations
//!
//! Key-value storage backends and the default notification platform adapter.

pub mod file_storage;
pub mod memory_storage;
pub mod log_notifications;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use log_notifications::LogNotificationPlatform;
