use std::sync::Arc;

use anyhow::Result;

use notification_feed::auth::{AccessTokenSession, SessionContext};
use notification_feed::config::Settings;
use notification_feed::gateway::HttpNotificationGateway;
use notification_feed::notification::{NotificationFetcher, TracingEventSink};
use notification_feed::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let (fetcher, session) = setup()?;

    fetcher.fetch(&session, &TracingEventSink).await;

    tracing::info!("Notification fetch complete");
    Ok(())
}

fn setup() -> notification_feed::error::Result<(NotificationFetcher, AccessTokenSession)> {
    // Load configuration
    let settings = Settings::new()?;

    // Initialize tracing
    init_telemetry(&settings.log)?;
    tracing::info!(base_url = %settings.api.base_url, "Configuration loaded");

    let session = AccessTokenSession::from_config(&settings.session);
    let identity_id = session.identity_id()?;
    tracing::info!(identity_id = %identity_id, "Session resolved");

    let gateway = HttpNotificationGateway::new(&settings.api)?;

    Ok((NotificationFetcher::new(Arc::new(gateway)), session))
}
