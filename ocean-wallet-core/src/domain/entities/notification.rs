//! Notification entities

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::shared::error::WalletError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationType {
    Transaction,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Transaction => "TRANSACTION",
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "TRANSACTION" => Ok(NotificationType::Transaction),
            other => Err(WalletError::validation(format!("Unknown notification type: {}", other))),
        }
    }
}

/// Persisted per-type preference entry.
///
/// `notification_type` stays a raw string so unknown or future types survive a
/// round trip and are filtered when applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreference {
    #[serde(rename = "type")]
    pub notification_type: String,
    pub value: bool,
}

impl NotificationPreference {
    pub fn new(notification_type: NotificationType, value: bool) -> Self {
        Self {
            notification_type: notification_type.as_str().to_string(),
            value,
        }
    }
}

/// Platform authorisation state for notifications
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

/// Operating system family the platform adapter runs on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlatformOs {
    Android,
    Ios,
    Web,
    Desktop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendNotificationData {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl SendNotificationData {
    pub fn new(notification_type: NotificationType, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            notification_type,
            title: title.into(),
            body: body.into(),
            data: HashMap::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// Content handed to the platform; scheduled with an immediate trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationContent {
    pub title: String,
    pub body: String,
    pub data: HashMap<String, serde_json::Value>,
}

/// Why a send did not reach the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuppressReason {
    PermissionNotGranted,
    TypeNotAllowed,
}

/// Result of a send attempt. Never escalated to the caller as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Dispatched,
    Suppressed(SuppressReason),
    PlatformFailure(String),
}

impl DispatchOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, DispatchOutcome::Dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_round_trip_names() {
        assert_eq!(NotificationType::Transaction.as_str(), "TRANSACTION");
        assert_eq!(
            "TRANSACTION".parse::<NotificationType>().expect("Failed to parse type"),
            NotificationType::Transaction
        );
        assert!("PRICE_ALERT".parse::<NotificationType>().is_err());
    }

    #[test]
    fn test_preference_json_shape() {
        let pref = NotificationPreference::new(NotificationType::Transaction, true);
        let json = serde_json::to_string(&pref).expect("Failed to serialize preference");
        assert_eq!(json, r#"{"type":"TRANSACTION","value":true}"#);
    }

    #[test]
    fn test_send_data_builder() {
        let data = SendNotificationData::new(NotificationType::Transaction, "Title", "Body")
            .with_data("txid", serde_json::json!("abc"));
        assert_eq!(data.data.get("txid"), Some(&serde_json::json!("abc")));
    }
}
