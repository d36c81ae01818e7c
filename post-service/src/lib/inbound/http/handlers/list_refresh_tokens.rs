use axum::extract::State;
use axum::http::StatusCode;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::auth::models::RefreshToken;
use crate::inbound::http::router::AppState;

/// Administrative listing of all refresh-token records, including expired
/// and revoked history. Guarded by the API-key middleware.
pub async fn list_refresh_tokens(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<RefreshTokenData>>, ApiError> {
    let tokens = state
        .auth_service
        .list_refresh_tokens()
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        tokens.iter().map(RefreshTokenData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshTokenData {
    pub token: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl From<&RefreshToken> for RefreshTokenData {
    fn from(token: &RefreshToken) -> Self {
        Self {
            token: token.token.clone(),
            user_id: token.user_id.to_string(),
            created_at: token.created_at,
            updated_at: token.updated_at,
            expires_at: token.expires_at,
            revoked_at: token.revoked_at,
        }
    }
}
