use std::fmt;

use thiserror::Error;

use crate::config::SessionConfig;

use super::AccessTokenDecoder;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid access token: {0}")]
    InvalidAccessToken(String),
}

/// Credentials sent with every request to the notification service
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_token: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Read-only view of the current user's session.
///
/// The session is owned elsewhere; the fetcher only reads from it.
pub trait SessionContext: Send + Sync {
    /// Identity ID of the signed-in user
    fn identity_id(&self) -> Result<String, SessionError>;

    /// Credentials authorizing requests for that user
    fn credentials(&self) -> Result<Credentials, SessionError>;

    /// Continuation token saved from the previous page, if any
    fn continuation_token(&self) -> Option<String>;
}

/// Session backed by a bearer access token.
///
/// The identity is the token's `sub` claim.
pub struct AccessTokenSession {
    access_token: String,
    continuation_token: Option<String>,
    decoder: AccessTokenDecoder,
}

impl AccessTokenSession {
    pub fn new(access_token: impl Into<String>, continuation_token: Option<String>) -> Self {
        Self {
            access_token: access_token.into(),
            continuation_token,
            decoder: AccessTokenDecoder::new(),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.access_token.clone(), config.continuation_token.clone())
    }
}

impl SessionContext for AccessTokenSession {
    fn identity_id(&self) -> Result<String, SessionError> {
        let claims = self.decoder.decode(&self.access_token)?;
        Ok(claims.identity_id().to_string())
    }

    fn credentials(&self) -> Result<Credentials, SessionError> {
        Ok(Credentials {
            access_token: self.access_token.clone(),
        })
    }

    fn continuation_token(&self) -> Option<String> {
        self.continuation_token.clone()
    }
}
