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
use crate::domain::subreddit::models::CreateSubredditCommand;
use crate::domain::subreddit::models::Subreddit;
use crate::domain::subreddit::models::SubredditName;
use crate::inbound::http::middleware::AuthSession;
use crate::inbound::http::router::AppState;

pub async fn create_subreddit(
    State(state): State<AppState>,
    Extension(session): Extension<AuthSession>,
    Json(body): Json<CreateSubredditRequest>,
) -> Result<ApiSuccess<SubredditData>, ApiError> {
    // The owner is the authenticated user, never a payload field.
    let owner = session.require()?.user.id;

    let name = SubredditName::new(body.name)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .subreddit_service
        .create_subreddit(
            CreateSubredditCommand {
                name,
                description: body.description,
            },
            owner,
        )
        .await
        .map_err(ApiError::from)
        .map(|ref subreddit| ApiSuccess::new(StatusCode::CREATED, subreddit.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSubredditRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubredditData {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Subreddit> for SubredditData {
    fn from(subreddit: &Subreddit) -> Self {
        Self {
            id: subreddit.id.0,
            name: subreddit.name.as_str().to_string(),
            description: subreddit.description.clone(),
            owner_id: subreddit.owner_id.0,
            created_at: subreddit.created_at,
        }
    }
}
