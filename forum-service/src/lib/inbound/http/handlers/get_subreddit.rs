use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_subreddit::SubredditData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::subreddit::models::SubredditName;
use crate::inbound::http::router::AppState;

pub async fn get_subreddit(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<SubredditData>, ApiError> {
    let name = SubredditName::new(name)
        .map_err(|_| ApiError::NotFound("Subreddit not found".to_string()))?;

    state
        .subreddit_service
        .get_subreddit(&name)
        .await
        .map_err(ApiError::from)
        .map(|ref subreddit| ApiSuccess::new(StatusCode::OK, subreddit.into()))
}
