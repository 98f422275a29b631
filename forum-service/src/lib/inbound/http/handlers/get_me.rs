use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::middleware::AuthSession;

pub async fn get_me(
    Extension(session): Extension<AuthSession>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let authenticated = session.require()?;

    Ok(ApiSuccess::new(StatusCode::OK, (&authenticated.user).into()))
}
