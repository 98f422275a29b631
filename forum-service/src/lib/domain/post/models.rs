use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::post::errors::PostTitleError;
use crate::domain::subreddit::models::SubredditId;
use crate::domain::user::models::UserId;

/// Post aggregate entity: a user submission to a subreddit.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub content: Option<String>,
    pub url: Option<String>,
    pub author_id: UserId,
    pub subreddit_id: SubredditId,
    pub created_at: DateTime<Utc>,
}

/// Post unique identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title value type
///
/// Non-empty, at most 300 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MAX_LENGTH: usize = 300;

    /// Create a new valid post title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty or whitespace only
    /// * `TooLong` - Title longer than 300 characters
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        if title.trim().is_empty() {
            return Err(PostTitleError::Empty);
        }
        if title.len() > Self::MAX_LENGTH {
            return Err(PostTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: title.len(),
            });
        }
        Ok(Self(title))
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Insert payload for a new post row.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub content: Option<String>,
    pub url: Option<String>,
    pub author_id: UserId,
    pub subreddit_id: SubredditId,
}

/// Command to create a new post with validated fields.
///
/// The author is not part of the command; it is always the authenticated
/// user, bound by the handler. The target subreddit comes from the URL.
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub content: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_valid() {
        let title = PostTitle::new("Hello world".to_string()).unwrap();
        assert_eq!(title.as_str(), "Hello world");
    }

    #[test]
    fn test_title_empty() {
        assert!(matches!(
            PostTitle::new("   ".to_string()),
            Err(PostTitleError::Empty)
        ));
    }

    #[test]
    fn test_title_too_long() {
        assert!(matches!(
            PostTitle::new("a".repeat(301)),
            Err(PostTitleError::TooLong { .. })
        ));
    }
}
