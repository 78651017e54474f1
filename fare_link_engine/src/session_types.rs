//! The linking session: the sole stateful entity in the gateway.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use flg_common::Secret;
use serde::{Deserialize, Serialize};

/// An opaque, unpredictable session identifier. It doubles as the OAuth `state` parameter and
/// as the path segment that lets inbound webhook deliveries self-identify their session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Lifecycle position of a session. Transitions are monotonic; the only exit is the terminal
/// `LoggedOut` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SessionStatus {
    Created,
    AwaitingRideAuth,
    RideAuthorized,
    Active,
    LoggedOut,
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionStatus::Created => "Created",
            SessionStatus::AwaitingRideAuth => "AwaitingRideAuth",
            SessionStatus::RideAuthorized => "RideAuthorized",
            SessionStatus::Active => "Active",
            SessionStatus::LoggedOut => "LoggedOut",
        };
        f.write_str(s)
    }
}

/// Links one bank identity to one ride-hailing identity.
///
/// Created on login with the bank credentials; the OAuth callback adds the ride token, webhook
/// registration adds the webhook id. Removed from the store on logout.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: SessionId,
    pub mondo_access_token: Secret<String>,
    pub mondo_account_id: String,
    pub uber_access_token: Option<Secret<String>>,
    pub mondo_webhook_id: Option<String>,
    pub status: SessionStatus,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(session_id: SessionId, mondo_access_token: Secret<String>, mondo_account_id: String) -> Self {
        Self {
            session_id,
            mondo_access_token,
            mondo_account_id,
            uber_access_token: None,
            mondo_webhook_id: None,
            status: SessionStatus::Created,
            created_at: Utc::now(),
        }
    }

    /// Moves the session forward in its lifecycle. Backward transitions are ignored, so a
    /// replayed callback cannot regress an `Active` session.
    pub fn advance_to(&mut self, status: SessionStatus) {
        if status > self.status {
            self.status = status;
        }
    }

    pub fn is_linked(&self) -> bool {
        self.uber_access_token.is_some()
    }
}
