use std::sync::Arc;

use crate::auth::SessionContext;
use crate::gateway::NotificationGateway;

use super::{unacknowledged_notifications, EventSink, NotificationSignal};

/// Fetches a page of the signed-in user's notifications and reports the
/// outcome as signals.
pub struct NotificationFetcher {
    gateway: Arc<dyn NotificationGateway>,
}

impl NotificationFetcher {
    pub fn new(gateway: Arc<dyn NotificationGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch one page and emit signals to `sink`.
    ///
    /// Always emits `RequestStarted` first. On success, emits one
    /// `NotificationQueued` per unacknowledged activation in page order, then
    /// `RequestSucceeded`. On any failure, emits `RequestFailed` and nothing
    /// else. Failures never propagate to the caller.
    #[tracing::instrument(name = "fetcher.fetch", skip_all)]
    pub async fn fetch(&self, session: &dyn SessionContext, sink: &dyn EventSink) {
        sink.dispatch(NotificationSignal::RequestStarted);

        let resolved = session.identity_id().and_then(|identity_id| {
            session
                .credentials()
                .map(|credentials| (identity_id, credentials))
        });
        let (identity_id, credentials) = match resolved {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!(error = %e, "Could not resolve session for notification fetch");
                sink.dispatch(NotificationSignal::RequestFailed);
                return;
            }
        };
        let continuation_token = session.continuation_token();

        let page = match self
            .gateway
            .get_user_notifications(&identity_id, &credentials, continuation_token.as_deref())
            .await
        {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(
                    identity_id = %identity_id,
                    error = %e,
                    "Notification fetch failed"
                );
                sink.dispatch(NotificationSignal::RequestFailed);
                return;
            }
        };

        let unacknowledged = unacknowledged_notifications(&page.notifications, &identity_id);
        tracing::debug!(
            identity_id = %identity_id,
            total = page.notifications.len(),
            unacknowledged = unacknowledged.len(),
            "Queueing unacknowledged notifications"
        );

        for notification in unacknowledged {
            sink.dispatch(NotificationSignal::NotificationQueued {
                notification: notification.clone(),
            });
        }

        sink.dispatch(NotificationSignal::RequestSucceeded {
            notifications: page.notifications,
            continuation_token: page.continuation_token,
        });
    }
}
