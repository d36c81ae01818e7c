use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_post::PostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    // An unparseable ID cannot name any post
    let post_id = PostId::from_string(&id).map_err(|e| ApiError::NotFound(e.to_string()))?;

    state
        .post_service
        .get_post(&post_id)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
