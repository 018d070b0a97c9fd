use std::sync::Arc;

use crate::domain::entities::NotificationPreference;
use crate::domain::repositories::StorageRepository;
use crate::shared::constants::NOTIFICATION_PREFERENCE_KEY;
use crate::shared::error::WalletError;

/// Per-type notification preferences, stored as a JSON array
pub struct NotificationPersistence {
    storage: Arc<dyn StorageRepository>,
}

impl NotificationPersistence {
    pub fn new(storage: Arc<dyn StorageRepository>) -> Self {
        Self { storage }
    }

    /// Stored preferences; missing or unreadable data yields an empty list
    pub async fn get(&self) -> Vec<NotificationPreference> {
        let raw = match self.storage.get_item(NOTIFICATION_PREFERENCE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::error!("Failed to read notification preferences: {}", e);
                return Vec::new();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("Discarding malformed notification preferences: {}", e);
            Vec::new()
        })
    }

    pub async fn set(&self, preferences: &[NotificationPreference]) -> Result<(), WalletError> {
        let raw = serde_json::to_string(preferences)?;
        self.storage.set_item(NOTIFICATION_PREFERENCE_KEY, &raw).await
    }
}
