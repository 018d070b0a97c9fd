use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::entities::{NotificationContent, PermissionStatus, PlatformOs};
use crate::domain::repositories::NotificationPlatform;
use crate::shared::error::WalletError;

/// Platform adapter for hosts without a notification centre.
///
/// Permission is granted on request and every scheduled notification is
/// written to the log and kept for inspection.
pub struct LogNotificationPlatform {
    status: Mutex<PermissionStatus>,
    delivered: Mutex<Vec<NotificationContent>>,
}

impl LogNotificationPlatform {
    pub fn new() -> Self {
        Self {
            status: Mutex::new(PermissionStatus::Undetermined),
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn delivered(&self) -> Vec<NotificationContent> {
        self.delivered.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Default for LogNotificationPlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPlatform for LogNotificationPlatform {
    fn os(&self) -> PlatformOs {
        PlatformOs::Desktop
    }

    async fn get_permission_status(&self) -> Result<PermissionStatus, WalletError> {
        self.status
            .lock()
            .map(|s| *s)
            .map_err(|_| WalletError::notification("Permission lock poisoned"))
    }

    async fn request_permission(&self) -> Result<PermissionStatus, WalletError> {
        let mut status = self.status
            .lock()
            .map_err(|_| WalletError::notification("Permission lock poisoned"))?;
        *status = PermissionStatus::Granted;
        Ok(*status)
    }

    async fn set_notification_channel(&self, name: &str) -> Result<(), WalletError> {
        log::debug!("Notification channel '{}' registered", name);
        Ok(())
    }

    async fn schedule_notification(&self, content: NotificationContent) -> Result<(), WalletError> {
        log::info!("[notification] {}: {}", content.title, content.body);
        self.delivered
            .lock()
            .map_err(|_| WalletError::notification("Delivery lock poisoned"))?
            .push(content);
        Ok(())
    }
}
