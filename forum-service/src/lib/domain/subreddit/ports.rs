use async_trait::async_trait;

use crate::domain::subreddit::errors::SubredditError;
use crate::domain::subreddit::models::CreateSubredditCommand;
use crate::domain::subreddit::models::NewSubreddit;
use crate::domain::subreddit::models::Subreddit;
use crate::domain::subreddit::models::SubredditName;
use crate::domain::user::models::UserId;

/// Port for subreddit domain service operations.
#[async_trait]
pub trait SubredditServicePort: Send + Sync + 'static {
    /// Create a new subreddit owned by `owner`.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - A subreddit with this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create_subreddit(
        &self,
        command: CreateSubredditCommand,
        owner: UserId,
    ) -> Result<Subreddit, SubredditError>;

    /// List all subreddits, ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_subreddits(&self) -> Result<Vec<Subreddit>, SubredditError>;

    /// Retrieve a subreddit by name.
    ///
    /// # Errors
    /// * `NotFound` - Subreddit does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_subreddit(&self, name: &SubredditName) -> Result<Subreddit, SubredditError>;
}

/// Persistence operations for the subreddit aggregate.
#[async_trait]
pub trait SubredditRepository: Send + Sync + 'static {
    /// Persist a new subreddit, returning the stored entity with its assigned id.
    ///
    /// # Errors
    /// * `NameAlreadyExists` - A subreddit with this name exists
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, subreddit: NewSubreddit) -> Result<Subreddit, SubredditError>;

    /// Retrieve a subreddit by name (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_name(&self, name: &SubredditName)
        -> Result<Option<Subreddit>, SubredditError>;

    /// Retrieve all subreddits, ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Subreddit>, SubredditError>;
}
