use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

/// The login form, field names matching the landing page markup.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "mondo-access-token", default)]
    pub mondo_access_token: String,
    #[serde(rename = "mondo-account-id", default)]
    pub mondo_account_id: String,
}

/// Standard OAuth redirect parameters; `state` carries the session id.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutForm {
    pub session_id: String,
}
