use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // A syntactically invalid username cannot match any account; treat it
    // as a credential mismatch rather than a validation error.
    let username =
        Username::new(body.username).map_err(|_| ApiError::not_authorized())?;

    let outcome = state
        .user_service
        .login(LoginCommand {
            username,
            password: body.password,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        LoginResponseData {
            access_token: outcome.access_token,
            token_type: "Bearer".to_string(),
            user: (&outcome.user).into(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub user: UserData,
}
