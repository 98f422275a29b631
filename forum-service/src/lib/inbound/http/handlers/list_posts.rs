use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_post::PostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::subreddit::models::SubredditName;
use crate::inbound::http::router::AppState;

pub async fn list_posts(
    State(state): State<AppState>,
    Path(subreddit): Path<String>,
) -> Result<ApiSuccess<Vec<PostData>>, ApiError> {
    let subreddit_name = SubredditName::new(subreddit)
        .map_err(|_| ApiError::NotFound("Subreddit not found".to_string()))?;

    state
        .post_service
        .list_posts(&subreddit_name)
        .await
        .map_err(ApiError::from)
        .map(|posts| ApiSuccess::new(StatusCode::OK, posts.iter().map(PostData::from).collect()))
}
