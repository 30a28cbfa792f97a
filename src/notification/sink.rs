//! Destinations for notification signals.

use tokio::sync::mpsc::UnboundedSender;

use super::NotificationSignal;

/// Receiver of outcome signals, typically the application state store.
///
/// Signals are delivered in emission order. Implementations must not block.
pub trait EventSink: Send + Sync {
    fn dispatch(&self, signal: NotificationSignal);
}

/// Forward signals into a channel read by the state store
impl EventSink for UnboundedSender<NotificationSignal> {
    fn dispatch(&self, signal: NotificationSignal) {
        let name = signal.name();
        if self.send(signal).is_err() {
            tracing::warn!(signal = name, "Signal receiver dropped, discarding signal");
        }
    }
}

/// Sink that only logs each signal
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn dispatch(&self, signal: NotificationSignal) {
        match &signal {
            NotificationSignal::RequestSucceeded {
                notifications,
                continuation_token,
            } => tracing::info!(
                signal = signal.name(),
                count = notifications.len(),
                continuation_token = ?continuation_token,
                "Notifications fetched"
            ),
            NotificationSignal::NotificationQueued { notification } => tracing::info!(
                signal = signal.name(),
                notification_id = %notification.id,
                "Unacknowledged notification queued"
            ),
            NotificationSignal::RequestFailed => {
                tracing::warn!(signal = signal.name(), "Notification fetch failed")
            }
            NotificationSignal::RequestStarted => {
                tracing::debug!(signal = signal.name(), "Notification fetch started")
            }
        }
    }
}
