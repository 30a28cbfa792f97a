use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::auth::Credentials;
use crate::config::ApiConfig;
use crate::notification::Notification;

use super::{GatewayError, NotificationGateway, NotificationPage, CONTINUATION_HEADER};

/// `NotificationGateway` over HTTP
#[derive(Clone)]
pub struct HttpNotificationGateway {
    client: ClientWithMiddleware,
    base_url: Url,
}

impl HttpNotificationGateway {
    pub fn new(config: &ApiConfig) -> Result<Self, GatewayError> {
        let client = ClientBuilder::new(
            Client::builder()
                .timeout(Duration::from_millis(config.timeout_ms))
                .build()
                .map_err(|error| GatewayError::Client(error.to_string()))?,
        )
        .build();

        Self::with_client(client, &config.base_url)
    }

    /// Use a prebuilt client, e.g. one carrying extra middleware
    pub fn with_client(
        client: ClientWithMiddleware,
        base_url: &str,
    ) -> Result<Self, GatewayError> {
        let base_url = Url::parse(base_url).map_err(|error| {
            GatewayError::Client(format!("Invalid base URL {}: {}", base_url, error))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Client(format!(
                "Base URL cannot carry a path: {}",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Endpoint for one user, with the identity as a single encoded path segment
    fn user_notifications_url(&self, identity_id: &str) -> Result<Url, GatewayError> {
        // `.` and `..` would be dropped as segments, leaving the user endpoint
        if matches!(identity_id, "" | "." | "..") {
            return Err(GatewayError::InvalidIdentity(identity_id.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                GatewayError::Client(format!("Base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(["notifications", "user", identity_id]);

        Ok(url)
    }
}

#[async_trait]
impl NotificationGateway for HttpNotificationGateway {
    #[tracing::instrument(name = "gateway.get_user_notifications", skip(self, credentials))]
    async fn get_user_notifications(
        &self,
        identity_id: &str,
        credentials: &Credentials,
        continuation_token: Option<&str>,
    ) -> Result<NotificationPage, GatewayError> {
        let url = self.user_notifications_url(identity_id)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(&credentials.access_token)
            .header(CONTINUATION_HEADER, continuation_token.unwrap_or_default())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        // A cursor that cannot be read must not look like the last page
        let continuation_token = response
            .headers()
            .get(CONTINUATION_HEADER)
            .map(|value| {
                value.to_str().map(str::to_string).map_err(|error| {
                    GatewayError::Decode(format!(
                        "Unreadable {} header: {}",
                        CONTINUATION_HEADER, error
                    ))
                })
            })
            .transpose()?;

        let notifications = response
            .json::<Vec<Notification>>()
            .await
            .map_err(|error| GatewayError::Decode(error.to_string()))?;

        tracing::debug!(
            count = notifications.len(),
            has_continuation = continuation_token.is_some(),
            "Fetched notification page"
        );

        Ok(NotificationPage {
            notifications,
            continuation_token,
        })
    }
}
