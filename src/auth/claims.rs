use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Claims read from the session's access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identity ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    /// Additional custom claims
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    pub fn identity_id(&self) -> &str {
        &self.sub
    }
}
