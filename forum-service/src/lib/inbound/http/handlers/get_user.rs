use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

pub async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<ApiSuccess<UserData>, ApiError> {
    let username =
        Username::new(username).map_err(|_| ApiError::NotFound("User not found".to_string()))?;

    state
        .user_service
        .get_user_by_username(&username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::OK, user.into()))
}
