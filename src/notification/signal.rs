use serde::Serialize;

use super::Notification;

/// Outcome signals emitted while fetching a user's notifications.
///
/// One fetch emits `RequestStarted`, then either `RequestFailed`, or zero
/// or more `NotificationQueued` followed by `RequestSucceeded`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationSignal {
    /// The fetch has started
    RequestStarted,
    /// The page was fetched
    RequestSucceeded {
        /// Every notification on the page, filtered or not
        notifications: Vec<Notification>,
        /// Continuation header of the response, if present
        continuation_token: Option<String>,
    },
    /// The fetch failed; no data is carried
    RequestFailed,
    /// An unacknowledged activation to push onto the display queue
    NotificationQueued { notification: Notification },
}

impl NotificationSignal {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            NotificationSignal::RequestStarted => "request_started",
            NotificationSignal::RequestSucceeded { .. } => "request_succeeded",
            NotificationSignal::RequestFailed => "request_failed",
            NotificationSignal::NotificationQueued { .. } => "notification_queued",
        }
    }
}
