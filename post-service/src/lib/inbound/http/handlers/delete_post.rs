use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::post::models::PostId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Delete a post. Only its author may do so; anyone else gets 403 and the
/// post is untouched.
pub async fn delete_post(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let post_id = PostId::from_string(&id).map_err(|e| ApiError::NotFound(e.to_string()))?;

    state
        .post_service
        .delete_post(&post_id, &authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
