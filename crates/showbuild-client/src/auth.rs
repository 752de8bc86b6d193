//! Login endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use showbuild_core::{LoginClient, LoginRequest, LoginResponse};
use showbuild_models::User;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Body of `POST /auth/login`. Older servers name the token `token`.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token: Option<String>,
    #[serde(default)]
    user: User,
}

#[async_trait]
impl LoginClient for ApiClient {
    /// Posts the credentials as an OAuth2 password form.
    async fn login(&self, request: &LoginRequest) -> showbuild_core::Result<LoginResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        let body: TokenResponse = self.post_form(url, request).await?;

        let token = body
            .access_token
            .or(body.token)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ClientError::Decode("login response has no token".to_string()))?;

        let mut user = body.user;
        if user.username.is_empty() {
            user.username = request.username.clone();
        }

        debug!(username = %user.username, "Login accepted");
        Ok(LoginResponse { token, user })
    }
}
