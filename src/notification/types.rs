use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Notification as returned by the notification service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Service-assigned identifier
    pub id: String,
    /// Type tag (only `Activation` is queued for display)
    pub notification_type: NotificationType,
    /// Users this notification was sent to
    #[serde(default)]
    pub notified_users: Vec<NotifiedUser>,
    /// Remaining fields, kept verbatim for display
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Recipient record of a notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifiedUser {
    /// Identity of the recipient
    pub identity_id: String,
    /// When the recipient acknowledged the notification.
    ///
    /// Kept as the raw string the service sent; values are not guaranteed
    /// to be valid RFC 3339.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acknowledged_date_time: Option<String>,
}

/// Notification type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NotificationType {
    Activation,
    Interval,
    /// Any tag this client does not know about
    #[serde(other)]
    Other,
}

impl Notification {
    /// Create a notification with no extra fields
    pub fn new(
        id: impl Into<String>,
        notification_type: NotificationType,
        notified_users: Vec<NotifiedUser>,
    ) -> Self {
        Self {
            id: id.into(),
            notification_type,
            notified_users,
            extra: Map::new(),
        }
    }

    /// Recipient record for the given identity.
    ///
    /// Callers must ensure an identity appears at most once in
    /// `notified_users`; if it appears more than once, the first record wins.
    pub fn recipient(&self, identity_id: &str) -> Option<&NotifiedUser> {
        self.notified_users
            .iter()
            .find(|user| user.identity_id == identity_id)
    }

    /// Whether this is an activation the given user has not acknowledged yet
    pub fn is_unacknowledged_activation_for(&self, identity_id: &str) -> bool {
        self.notification_type == NotificationType::Activation
            && self
                .recipient(identity_id)
                .is_some_and(|user| !user.is_acknowledged())
    }
}

impl NotifiedUser {
    pub fn new(identity_id: impl Into<String>) -> Self {
        Self {
            identity_id: identity_id.into(),
            acknowledged_date_time: None,
        }
    }

    pub fn acknowledged(identity_id: impl Into<String>, at: impl Into<String>) -> Self {
        Self {
            identity_id: identity_id.into(),
            acknowledged_date_time: Some(at.into()),
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged_date_time.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_wire_format() {
        let notification: Notification = serde_json::from_value(json!({
            "id": "1",
            "notificationType": "Activation",
            "notifiedUsers": [
                { "identityId": "123", "acknowledgedDateTime": "2019-11-04T04:32.543Z" },
                { "identityId": "456" }
            ],
            "message": "Device activated"
        }))
        .unwrap();

        assert_eq!(notification.id, "1");
        assert_eq!(notification.notification_type, NotificationType::Activation);
        assert_eq!(
            notification.notified_users[0].acknowledged_date_time.as_deref(),
            Some("2019-11-04T04:32.543Z")
        );
        assert!(!notification.notified_users[1].is_acknowledged());
        assert_eq!(notification.extra["message"], json!("Device activated"));
    }

    #[test]
    fn test_null_acknowledgement_is_absent() {
        let user: NotifiedUser = serde_json::from_value(json!({
            "identityId": "123",
            "acknowledgedDateTime": null
        }))
        .unwrap();

        assert!(!user.is_acknowledged());
    }

    #[test]
    fn test_unknown_type_is_other() {
        let notification: Notification = serde_json::from_value(json!({
            "id": "9",
            "notificationType": "Maintenance",
            "notifiedUsers": []
        }))
        .unwrap();

        assert_eq!(notification.notification_type, NotificationType::Other);
    }

    #[test]
    fn test_recipient_first_match_wins() {
        let notification = Notification::new(
            "1",
            NotificationType::Activation,
            vec![
                NotifiedUser::acknowledged("123", "2019-11-04T04:32.543Z"),
                NotifiedUser::new("123"),
            ],
        );

        assert!(notification.recipient("123").unwrap().is_acknowledged());
        assert!(!notification.is_unacknowledged_activation_for("123"));
    }

    #[test]
    fn test_serialize_round_trips_extra_fields() {
        let raw = json!({
            "id": "2",
            "notificationType": "Interval",
            "notifiedUsers": [{ "identityId": "123" }],
            "deviceId": "abc"
        });
        let notification: Notification = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(serde_json::to_value(&notification).unwrap(), raw);
    }
}
