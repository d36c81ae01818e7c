use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the verified subject of the access token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware guarding user-protected routes.
///
/// Verifies the signed access token from the `Authorization: Bearer` header
/// and stores the subject in request extensions. Any failure rejects the
/// request with the uniform unauthorized response before a handler runs.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = auth::bearer_token(req.headers()).map_err(|e| {
        tracing::debug!("Rejected request without bearer credential: {}", e);
        unauthorized()
    })?;

    let user_id = state
        .auth_service
        .verify_access_token(token)
        .await
        .map_err(|e| {
            tracing::warn!("Access token verification failed: {}", e);
            unauthorized()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Middleware guarding the administrative routes.
///
/// Requires `Authorization: ApiKey <key>` matching the configured service
/// key. User identity plays no part here.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let key = auth::api_key(req.headers()).map_err(|e| {
        tracing::debug!("Rejected admin request without api key: {}", e);
        unauthorized()
    })?;

    if key != state.api_key {
        tracing::warn!("Rejected admin request with wrong api key");
        return Err(unauthorized());
    }

    Ok(next.run(req).await)
}

fn unauthorized() -> Response {
    ApiError::Unauthorized("Invalid credentials".to_string()).into_response()
}
