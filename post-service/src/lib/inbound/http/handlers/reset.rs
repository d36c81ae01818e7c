use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Wipe users and posts. Development environments only; any other platform
/// label gets 403 regardless of credentials.
pub async fn reset(State(state): State<AppState>) -> Result<ApiSuccess<()>, ApiError> {
    if state.platform != "dev" {
        return Err(ApiError::Forbidden(
            "Reset is only available on the dev platform".to_string(),
        ));
    }

    state
        .post_service
        .delete_all_posts()
        .await
        .map_err(ApiError::from)?;
    state
        .user_service
        .delete_all_users()
        .await
        .map_err(ApiError::from)?;

    tracing::info!("All users and posts removed");

    Ok(ApiSuccess::new(StatusCode::OK, ()))
}
