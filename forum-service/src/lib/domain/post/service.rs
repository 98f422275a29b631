use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::NewPost;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::subreddit::models::Subreddit;
use crate::domain::subreddit::models::SubredditName;
use crate::domain::subreddit::ports::SubredditRepository;
use crate::domain::user::models::UserId;

/// Domain service implementation for post operations.
///
/// Needs the subreddit repository as well, to resolve the URL's subreddit
/// name into a foreign key before inserting.
pub struct PostService<PR, SR>
where
    PR: PostRepository,
    SR: SubredditRepository,
{
    posts: Arc<PR>,
    subreddits: Arc<SR>,
}

impl<PR, SR> PostService<PR, SR>
where
    PR: PostRepository,
    SR: SubredditRepository,
{
    pub fn new(posts: Arc<PR>, subreddits: Arc<SR>) -> Self {
        Self { posts, subreddits }
    }

    async fn resolve_subreddit(&self, name: &SubredditName) -> Result<Subreddit, PostError> {
        self.subreddits
            .find_by_name(name)
            .await
            .map_err(|e| PostError::DatabaseError(e.to_string()))?
            .ok_or(PostError::SubredditNotFound(name.to_string()))
    }
}

#[async_trait]
impl<PR, SR> PostServicePort for PostService<PR, SR>
where
    PR: PostRepository,
    SR: SubredditRepository,
{
    async fn create_post(
        &self,
        subreddit_name: &SubredditName,
        command: CreatePostCommand,
        author: UserId,
    ) -> Result<Post, PostError> {
        let subreddit = self.resolve_subreddit(subreddit_name).await?;

        let post = NewPost {
            title: command.title,
            content: command.content,
            url: command.url,
            author_id: author,
            subreddit_id: subreddit.id,
        };

        self.posts.create(post).await
    }

    async fn get_post(&self, id: &PostId) -> Result<Post, PostError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(PostError::NotFound(id.to_string()))
    }

    async fn list_posts(&self, subreddit_name: &SubredditName) -> Result<Vec<Post>, PostError> {
        let subreddit = self.resolve_subreddit(subreddit_name).await?;
        self.posts.list_by_subreddit(&subreddit.id).await
    }
}
