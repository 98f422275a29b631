use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::subreddit::errors::SubredditError;
use crate::domain::subreddit::models::NewSubreddit;
use crate::domain::subreddit::models::Subreddit;
use crate::domain::subreddit::models::SubredditId;
use crate::domain::subreddit::models::SubredditName;
use crate::domain::subreddit::ports::SubredditRepository;
use crate::domain::user::models::UserId;

pub struct PostgresSubredditRepository {
    pool: PgPool,
}

impl PostgresSubredditRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubredditRow {
    id: i64,
    name: String,
    description: Option<String>,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl SubredditRow {
    fn try_into_subreddit(self) -> Result<Subreddit, SubredditError> {
        Ok(Subreddit {
            id: SubredditId(self.id),
            name: SubredditName::new(self.name)?,
            description: self.description,
            owner_id: UserId(self.owner_id),
            created_at: self.created_at,
        })
    }
}

const SUBREDDIT_COLUMNS: &str = "id, name, description, owner_id, created_at";

#[async_trait]
impl SubredditRepository for PostgresSubredditRepository {
    async fn create(&self, subreddit: NewSubreddit) -> Result<Subreddit, SubredditError> {
        let query = format!(
            "INSERT INTO subreddits (name, description, owner_id) \
             VALUES ($1, $2, $3) \
             RETURNING {SUBREDDIT_COLUMNS}"
        );

        let row = sqlx::query_as::<_, SubredditRow>(&query)
            .bind(subreddit.name.as_str())
            .bind(&subreddit.description)
            .bind(subreddit.owner_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation()
                        && db_err.constraint() == Some("subreddits_name_key")
                    {
                        return SubredditError::NameAlreadyExists(
                            subreddit.name.as_str().to_string(),
                        );
                    }
                }
                SubredditError::DatabaseError(e.to_string())
            })?;

        row.try_into_subreddit()
    }

    async fn find_by_name(
        &self,
        name: &SubredditName,
    ) -> Result<Option<Subreddit>, SubredditError> {
        let query = format!("SELECT {SUBREDDIT_COLUMNS} FROM subreddits WHERE name = $1");

        let row = sqlx::query_as::<_, SubredditRow>(&query)
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SubredditError::DatabaseError(e.to_string()))?;

        row.map(SubredditRow::try_into_subreddit).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Subreddit>, SubredditError> {
        let query = format!("SELECT {SUBREDDIT_COLUMNS} FROM subreddits ORDER BY name");

        let rows = sqlx::query_as::<_, SubredditRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SubredditError::DatabaseError(e.to_string()))?;

        rows.into_iter()
            .map(SubredditRow::try_into_subreddit)
            .collect()
    }
}
