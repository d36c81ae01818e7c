use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::create_user::create_user;
use super::handlers::delete_post::delete_post;
use super::handlers::get_post::get_post;
use super::handlers::get_posts::get_posts;
use super::handlers::health::health;
use super::handlers::list_refresh_tokens::list_refresh_tokens;
use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::reset::reset;
use super::handlers::revoke::revoke;
use super::handlers::update_user::update_user;
use super::middleware::require_api_key;
use super::middleware::require_bearer_token;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
    pub api_key: String,
    pub platform: String,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/healthz", get(health))
        .route("/api/users", post(create_user))
        .route("/api/login", post(login))
        .route("/api/refresh", post(refresh))
        .route("/api/revoke", post(revoke))
        .route("/api/posts", get(get_posts))
        .route("/api/posts/:post_id", get(get_post));

    let protected_routes = Router::new()
        .route("/api/users", put(update_user))
        .route("/api/posts", post(create_post))
        .route("/api/posts/:post_id", delete(delete_post))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_token,
        ));

    let admin_routes = Router::new()
        .route("/admin/tokens", get(list_refresh_tokens))
        .route("/admin/reset", post(reset))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
