use contracts::auth::{RefreshRequest, RefreshResponse, TokenPair, TokenRequest};

use crate::shared::api::{post_json, ApiError};

/// Obtain an access/refresh pair with username and password.
pub async fn login(username: String, password: String) -> Result<TokenPair, ApiError> {
    post_json("/token/", &TokenRequest { username, password }).await
}

/// Exchange a refresh token for a fresh access token.
pub async fn refresh(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    post_json(
        "/token/refresh/",
        &RefreshRequest {
            refresh: refresh_token,
        },
    )
    .await
}
