use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::subreddit::errors::SubredditNameError;
use crate::domain::user::models::UserId;

/// Community ("subreddit") aggregate entity.
#[derive(Debug, Clone)]
pub struct Subreddit {
    pub id: SubredditId,
    pub name: SubredditName,
    pub description: Option<String>,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Subreddit unique identifier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubredditId(pub i64);

impl fmt::Display for SubredditId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Subreddit name value type
///
/// Ensures the name is 3-50 characters of alphanumerics and underscores,
/// since it doubles as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubredditName(String);

impl SubredditName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 50;

    /// Create a new valid subreddit name.
    ///
    /// # Errors
    /// * `TooShort` - Name shorter than 3 characters
    /// * `TooLong` - Name longer than 50 characters
    /// * `InvalidCharacters` - Contains characters other than alphanumerics and underscore
    pub fn new(name: String) -> Result<Self, SubredditNameError> {
        let length = name.len();
        if length < Self::MIN_LENGTH {
            return Err(SubredditNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        if length > Self::MAX_LENGTH {
            return Err(SubredditNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }
        if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(SubredditNameError::InvalidCharacters);
        }
        Ok(Self(name))
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubredditName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Insert payload for a new subreddit row.
#[derive(Debug, Clone)]
pub struct NewSubreddit {
    pub name: SubredditName,
    pub description: Option<String>,
    pub owner_id: UserId,
}

/// Command to create a new subreddit with validated fields.
///
/// The owner is not part of the command; it is always the authenticated
/// user, bound by the handler.
#[derive(Debug)]
pub struct CreateSubredditCommand {
    pub name: SubredditName,
    pub description: Option<String>,
}
