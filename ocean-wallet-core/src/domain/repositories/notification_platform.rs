//! Notification platform contract
//!
//! Permission query/request, channel registration and an immediate-trigger
//! schedule primitive. Implemented by the host platform adapter.

use crate::domain::entities::{NotificationContent, PermissionStatus, PlatformOs};
use crate::shared::error::WalletError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPlatform: Send + Sync {
    fn os(&self) -> PlatformOs;

    async fn get_permission_status(&self) -> Result<PermissionStatus, WalletError>;

    async fn request_permission(&self) -> Result<PermissionStatus, WalletError>;

    async fn set_notification_channel(&self, name: &str) -> Result<(), WalletError>;

    /// Schedule with no delay
    async fn schedule_notification(&self, content: NotificationContent) -> Result<(), WalletError>;
}
