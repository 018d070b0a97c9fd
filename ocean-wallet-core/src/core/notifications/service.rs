use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::NotificationPersistence;
use crate::domain::entities::{
    DispatchOutcome, NotificationContent, NotificationPreference, NotificationType,
    PermissionStatus, PlatformOs, SendNotificationData, SuppressReason,
};
use crate::domain::repositories::NotificationPlatform;
use crate::shared::constants::DEFAULT_NOTIFICATION_CHANNEL;
use crate::shared::error::WalletError;

/// Notification dispatcher gated by permission and a per-type allow-list.
///
/// Constructed once and shared by reference; sends never fail the caller.
pub struct NotificationService {
    platform: Arc<dyn NotificationPlatform>,
    persistence: NotificationPersistence,
    status: RwLock<Option<PermissionStatus>>,
    allowed: RwLock<HashSet<NotificationType>>,
}

impl NotificationService {
    pub fn new(platform: Arc<dyn NotificationPlatform>, persistence: NotificationPersistence) -> Self {
        Self {
            platform,
            persistence,
            status: RwLock::new(None),
            allowed: RwLock::new(HashSet::new()),
        }
    }

    /// Load stored preferences and settle the platform permission.
    ///
    /// Safe to call repeatedly; permission is only requested while not granted.
    pub async fn register(&self) -> Result<(), WalletError> {
        let preferences = self.persistence.get().await;
        if !preferences.is_empty() {
            self.set_allowed_types(&preferences).await;
        }

        if self.platform.os() == PlatformOs::Web {
            return Ok(());
        }

        let mut status = self.platform.get_permission_status().await?;
        if status != PermissionStatus::Granted {
            status = self.platform.request_permission().await?;
        }
        *self.status.write().await = Some(status);

        if status != PermissionStatus::Granted {
            log::info!("Notification permission not granted: {:?}", status);
            return Ok(());
        }
        if self.platform.os() == PlatformOs::Android {
            self.platform.set_notification_channel(DEFAULT_NOTIFICATION_CHANNEL).await?;
        }
        Ok(())
    }

    /// Replace the allow-list with the enabled, known entries
    pub async fn set_allowed_types(&self, preferences: &[NotificationPreference]) {
        let allowed: HashSet<NotificationType> = preferences
            .iter()
            .filter(|preference| preference.value)
            .filter_map(|preference| preference.notification_type.parse().ok())
            .collect();
        *self.allowed.write().await = allowed;
    }

    /// Persist preferences and apply them
    pub async fn update_preferences(&self, preferences: &[NotificationPreference]) -> Result<(), WalletError> {
        self.persistence.set(preferences).await?;
        self.set_allowed_types(preferences).await;
        Ok(())
    }

    pub async fn permission_status(&self) -> Option<PermissionStatus> {
        *self.status.read().await
    }

    pub async fn allowed_types(&self) -> HashSet<NotificationType> {
        self.allowed.read().await.clone()
    }

    pub async fn send(&self, notification: SendNotificationData) -> DispatchOutcome {
        if *self.status.read().await != Some(PermissionStatus::Granted) {
            return DispatchOutcome::Suppressed(SuppressReason::PermissionNotGranted);
        }
        if !self.allowed.read().await.contains(&notification.notification_type) {
            return DispatchOutcome::Suppressed(SuppressReason::TypeNotAllowed);
        }

        let content = NotificationContent {
            title: notification.title,
            body: notification.body,
            data: notification.data,
        };
        match self.platform.schedule_notification(content).await {
            Ok(()) => DispatchOutcome::Dispatched,
            Err(e) => {
                log::error!("Failed to schedule notification: {}", e);
                DispatchOutcome::PlatformFailure(e.to_string())
            }
        }
    }
}
