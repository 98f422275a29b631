use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::subreddit::models::SubredditId;
use crate::domain::subreddit::models::SubredditName;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a new post in the named subreddit, authored by `author`.
    ///
    /// # Errors
    /// * `SubredditNotFound` - Target subreddit does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        subreddit_name: &SubredditName,
        command: CreatePostCommand,
        author: UserId,
    ) -> Result<Post, PostError>;

    /// Retrieve a post by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;

    /// List posts in the named subreddit, newest first.
    ///
    /// # Errors
    /// * `SubredditNotFound` - Subreddit does not exist
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self, subreddit_name: &SubredditName) -> Result<Vec<Post>, PostError>;
}

/// Persistence operations for the post aggregate.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post, returning the stored entity with its assigned id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, post: NewPost) -> Result<Post, PostError>;

    /// Retrieve a post by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts for a subreddit, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_by_subreddit(&self, subreddit_id: &SubredditId) -> Result<Vec<Post>, PostError>;
}
