use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::create_post::PostData;
use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::PostId;
use crate::inbound::http::router::AppState;

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<i64>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    state
        .post_service
        .get_post(&PostId(post_id))
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::OK, post.into()))
}
