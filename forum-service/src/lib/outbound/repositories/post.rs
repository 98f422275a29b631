use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::models::PostTitle;
use crate::domain::post::ports::PostRepository;
use crate::domain::subreddit::models::SubredditId;
use crate::domain::user::models::UserId;

pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: Option<String>,
    url: Option<String>,
    author_id: i64,
    subreddit_id: i64,
    created_at: DateTime<Utc>,
}

impl PostRow {
    fn try_into_post(self) -> Result<Post, PostError> {
        Ok(Post {
            id: PostId(self.id),
            title: PostTitle::new(self.title)?,
            content: self.content,
            url: self.url,
            author_id: UserId(self.author_id),
            subreddit_id: SubredditId(self.subreddit_id),
            created_at: self.created_at,
        })
    }
}

const POST_COLUMNS: &str = "id, title, content, url, author_id, subreddit_id, created_at";

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, PostError> {
        let query = format!(
            "INSERT INTO posts (title, content, url, author_id, subreddit_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {POST_COLUMNS}"
        );

        let row = sqlx::query_as::<_, PostRow>(&query)
            .bind(post.title.as_str())
            .bind(&post.content)
            .bind(&post.url)
            .bind(post.author_id.0)
            .bind(post.subreddit_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.try_into_post()
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        let query = format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1");

        let row = sqlx::query_as::<_, PostRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        row.map(PostRow::try_into_post).transpose()
    }

    async fn list_by_subreddit(&self, subreddit_id: &SubredditId) -> Result<Vec<Post>, PostError> {
        let query = format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE subreddit_id = $1 ORDER BY created_at DESC"
        );

        let rows = sqlx::query_as::<_, PostRow>(&query)
            .bind(subreddit_id.0)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(PostRow::try_into_post).collect()
    }
}
