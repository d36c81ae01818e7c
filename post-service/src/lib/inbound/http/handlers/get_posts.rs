use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::create_post::PostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::SortOrder;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn get_posts(
    State(state): State<AppState>,
    Query(params): Query<GetPostsParams>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    let author_id = params
        .author_id
        .map(|raw| UserId::from_string(&raw))
        .transpose()
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    // Anything other than an explicit "desc" keeps the default order
    let sort = match params.sort.as_deref() {
        Some("desc") => SortOrder::Descending,
        _ => SortOrder::Ascending,
    };

    let posts = state
        .post_service
        .list_posts(author_id, sort)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        posts.iter().map(PostData::from).collect(),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetPostsParams {
    author_id: Option<String>,
    sort: Option<String>,
}
