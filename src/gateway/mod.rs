//! Access to the remote notification service.
//!
//! `NotificationGateway` abstracts the HTTP call so the fetcher can be
//! driven by the real client (`HttpNotificationGateway`) or a test double.

mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::Credentials;
use crate::notification::Notification;

pub use http::HttpNotificationGateway;

/// Header carrying the pagination cursor, in both directions
pub const CONTINUATION_HEADER: &str = "x-ms-continuation";

/// Errors that can occur while fetching a page of notifications
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP client could not be built
    #[error("Client error: {0}")]
    Client(String),

    /// The request never produced a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest_middleware::Error),

    /// The service answered with a non-success status
    #[error("Unexpected response status: {0}")]
    Status(u16),

    /// The identity cannot be used as a path segment
    #[error("Invalid identity for request path: {0:?}")]
    InvalidIdentity(String),

    /// The body was not a list of notifications, or a header was unreadable
    #[error("Decode error: {0}")]
    Decode(String),
}

/// One page of a user's notifications
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPage {
    pub notifications: Vec<Notification>,
    /// Cursor for the next page, as sent in the response header
    pub continuation_token: Option<String>,
}

#[async_trait]
pub trait NotificationGateway: Send + Sync {
    /// Fetch one page of notifications addressed to `identity_id`.
    ///
    /// Makes a single attempt; there is no retry.
    async fn get_user_notifications(
        &self,
        identity_id: &str,
        credentials: &Credentials,
        continuation_token: Option<&str>,
    ) -> Result<NotificationPage, GatewayError>;
}
