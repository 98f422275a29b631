use axum::extract::State;
use axum::http::StatusCode;

use super::create_subreddit::SubredditData;
use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn list_subreddits(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SubredditData>>, ApiError> {
    state
        .subreddit_service
        .list_subreddits()
        .await
        .map_err(ApiError::from)
        .map(|subreddits| {
            ApiSuccess::new(
                StatusCode::OK,
                subreddits.iter().map(SubredditData::from).collect(),
            )
        })
}
