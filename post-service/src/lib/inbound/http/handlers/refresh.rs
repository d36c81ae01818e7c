use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::errors::AuthError;
use crate::inbound::http::router::AppState;

/// Exchange the opaque refresh token in the bearer header for a new access
/// token. The refresh token itself is left untouched.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiSuccess<RefreshResponseData>, ApiError> {
    let token_value =
        auth::bearer_token(&headers).map_err(|e| ApiError::from(AuthError::from(e)))?;

    let token = state
        .auth_service
        .refresh(token_value)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, RefreshResponseData { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshResponseData {
    pub token: String,
}
