//! Authentication endpoints.

use shared::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, MessageResponse, RegisterRequest,
    ResetPasswordRequest, User,
};

use super::{ApiClient, RequestOverrides};
use crate::error::Result;

/// Operations on the `/auth` resource.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Create a new account and start a session.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        self.client.post("/auth/register", request).await
    }

    /// Log into an existing account.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.client.post("/auth/login", request).await
    }

    /// Fetch the profile behind the current session.
    ///
    /// `token` replaces the stored credential for this call only - useful
    /// for checking a token before it has been persisted.
    pub async fn profile(&self, token: Option<&str>) -> Result<User> {
        match token {
            Some(token) => {
                self.client
                    .get_with("/auth/me", RequestOverrides::bearer(token))
                    .await
            }
            None => self.client.get("/auth/me").await,
        }
    }

    /// Ask the backend to mail a password-reset link.
    pub async fn forgot_password(&self, email: &str) -> Result<MessageResponse> {
        let request = ForgotPasswordRequest {
            email: email.to_string(),
        };
        self.client.post("/auth/forgot-password", &request).await
    }

    /// Complete a password reset.
    ///
    /// The reset token travels in the path; the body carries only the new
    /// password.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> Result<MessageResponse> {
        let request = ResetPasswordRequest {
            password: new_password.to_string(),
        };
        self.client
            .post(&format!("/auth/reset-password/{token}"), &request)
            .await
    }
}
