//! Access token request and response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Form body for `POST /request/token`.
#[derive(Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    pub application_id: String,
    pub private_key: String,
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("application_id", &self.application_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Token issued by the gateway.
///
/// Timestamps are epoch milliseconds as reported by the gateway. The token is
/// not refreshed automatically; callers request a new one once `expired_at`
/// has passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    #[serde(default)]
    pub server_time: i64,
    #[serde(default)]
    pub expired_at: i64,
}

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    pub fn server_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.server_time)
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expired_at)
    }

    /// A token without a usable expiry is treated as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expiry) if self.expired_at > 0 => now >= expiry,
            _ => true,
        }
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.token
    }
}
