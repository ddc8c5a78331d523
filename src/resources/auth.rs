use serde_json::Value;

use crate::envelope;
use crate::error::ApiError;
use crate::http::ApiClient;
use crate::models::{LoginRequest, LoginResponse, RegisterRequest};

/// AuthApi
///
/// `/auth/*`. Credentials are forwarded as-is and never logged. None of these calls
/// force a logout on 401/403: a wrong password is reported to the form, not treated
/// as an expired session.
pub struct AuthApi<'a> {
    api: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// POST /auth/login
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let raw = self.api.post_silent("/auth/login", &body).await?;
        // The token sits next to the user, at the top or one `data` level down.
        if raw.get("token").is_some() {
            Ok(serde_json::from_value(raw)?)
        } else {
            envelope::unwrap_item(raw)
        }
    }

    /// POST /auth/register
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Value, ApiError> {
        self.api.post_silent("/auth/register", payload).await
    }

    /// GET /auth/me
    ///
    /// Confirms the current token. A 401/403 here is reported to the caller without
    /// forcing a logout, since the boot check handles it by clearing the session
    /// quietly.
    pub async fn me(&self) -> Result<Value, ApiError> {
        self.api.get_silent("/auth/me").await
    }
}
