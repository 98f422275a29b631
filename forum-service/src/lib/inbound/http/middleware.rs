use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use thiserror::Error;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Request-scoped authentication result, stored in request extensions.
///
/// Either anonymous (no credential supplied) or bound to a full user
/// snapshot plus the raw token it was derived from. Recomputed on every
/// request, never persisted.
#[derive(Debug, Clone)]
pub struct AuthSession(Option<AuthenticatedUser>);

/// The authenticated identity bound to a request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        Self(None)
    }

    pub fn authenticated(user: User, token: String) -> Self {
        Self(Some(AuthenticatedUser { user, token }))
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref().map(|auth| &auth.user)
    }

    /// Handler-level guard: the authenticated user, or a uniform
    /// authorization rejection. Protected handlers call this before any
    /// side effect and use the returned id verbatim as owner/author.
    pub fn require(&self) -> Result<&AuthenticatedUser, ApiError> {
        self.0.as_ref().ok_or_else(ApiError::not_authorized)
    }
}

/// Why the gate rejected a presented credential.
///
/// Kept distinct for logs; every variant except `LookupFailed` is surfaced
/// to the client as the same opaque 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid authorization header format")]
    MalformedHeader,

    #[error("unsupported authentication scheme")]
    UnsupportedScheme,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("token subject does not resolve to a user")]
    UnknownSubject,

    #[error("user lookup failed: {0}")]
    LookupFailed(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::warn!(reason = %self, "Authentication rejected");
        match self {
            AuthError::LookupFailed(msg) => ApiError::InternalServerError(msg).into_response(),
            _ => ApiError::not_authorized().into_response(),
        }
    }
}

/// Authentication gate, applied to every route.
///
/// A missing `Authorization` header is the normal anonymous path and
/// passes through with an empty session; a header that is present but
/// malformed, carries the wrong scheme, fails validation, or names a
/// deleted user is rejected here, before any handler runs, even on routes
/// that accept anonymous access.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let session = match resolve_session(&state, req.headers()).await {
        Ok(session) => session,
        Err(rejection) => return Err(rejection.into_response()),
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

async fn resolve_session(
    state: &AppState,
    headers: &http::HeaderMap,
) -> Result<AuthSession, AuthError> {
    let Some(header) = headers.get(http::header::AUTHORIZATION) else {
        return Ok(AuthSession::anonymous());
    };

    let value = header.to_str().map_err(|_| AuthError::MalformedHeader)?;

    // Exactly "<scheme> <token>"; extra segments are a malformed attempt.
    let mut segments = value.split(' ');
    let (scheme, token) = match (segments.next(), segments.next(), segments.next()) {
        (Some(scheme), Some(token), None) => (scheme, token),
        _ => return Err(AuthError::MalformedHeader),
    };

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::UnsupportedScheme);
    }

    let subject = state
        .authenticator
        .validate_token(token)
        .map_err(|_| AuthError::InvalidToken)?;

    // A valid signature is not enough: the subject must still exist.
    let user = match state.user_service.get_user(&UserId(subject)).await {
        Ok(user) => user,
        Err(UserError::NotFound(_)) => return Err(AuthError::UnknownSubject),
        Err(e) => return Err(AuthError::LookupFailed(e.to_string())),
    };

    Ok(AuthSession::authenticated(user, token.to_string()))
}
