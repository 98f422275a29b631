use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostTitle;
use crate::domain::subreddit::models::SubredditName;
use crate::inbound::http::middleware::AuthSession;
use crate::inbound::http::router::AppState;

pub async fn create_post(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Path(subreddit): Path<String>,
    Json(body): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostData>, ApiError> {
    // The author is the authenticated user; any author-ish payload field
    // is ignored by construction.
    let author = session.require()?.user.id;

    let subreddit_name = SubredditName::new(subreddit)
        .map_err(|_| ApiError::NotFound("Subreddit not found".to_string()))?;
    let title =
        PostTitle::new(body.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .post_service
        .create_post(
            &subreddit_name,
            CreatePostCommand {
                title,
                content: body.content,
                url: body.url,
            },
            author,
        )
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePostRequest {
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostData {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub url: Option<String>,
    pub author_id: i64,
    pub subreddit_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.0,
            title: post.title.as_str().to_string(),
            content: post.content.clone(),
            url: post.url.clone(),
            author_id: post.author_id.0,
            subreddit_id: post.subreddit_id.0,
            created_at: post.created_at,
        }
    }
}
