use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;

use super::ApiError;
use crate::domain::auth::errors::AuthError;
use crate::inbound::http::router::AppState;

/// Revoke the refresh token carried in the bearer header.
///
/// Always responds 204 for a well-formed request, whether or not the value
/// matched a record: callers cannot probe which tokens exist.
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let token_value =
        auth::bearer_token(&headers).map_err(|e| ApiError::from(AuthError::from(e)))?;

    state
        .auth_service
        .revoke(token_value)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
