use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_post::create_post;
use super::handlers::create_subreddit::create_subreddit;
use super::handlers::get_me::get_me;
use super::handlers::get_post::get_post;
use super::handlers::get_subreddit::get_subreddit;
use super::handlers::get_user::get_user;
use super::handlers::list_posts::list_posts;
use super::handlers::list_subreddits::list_subreddits;
use super::handlers::login::login;
use super::handlers::register_user::register_user;
use super::middleware::authenticate;
use crate::domain::post::ports::PostServicePort;
use crate::domain::subreddit::ports::SubredditServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServicePort>,
    pub subreddit_service: Arc<dyn SubredditServicePort>,
    pub post_service: Arc<dyn PostServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    user_service: Arc<dyn UserServicePort>,
    subreddit_service: Arc<dyn SubredditServicePort>,
    post_service: Arc<dyn PostServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        user_service,
        subreddit_service,
        post_service,
        authenticator,
    };

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

    // Every route sits behind the authentication gate; handlers that need
    // an identity enforce it themselves via AuthSession::require.
    Router::new()
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login))
        .route("/api/users/me", get(get_me))
        .route("/api/users/:username", get(get_user))
        .route("/api/subreddits", post(create_subreddit).get(list_subreddits))
        .route("/api/subreddits/:name", get(get_subreddit))
        .route("/api/r/:subreddit/posts", post(create_post).get(list_posts))
        .route("/api/posts/:post_id", get(get_post))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
