use thiserror::Error;

/// Error for SubredditName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubredditNameError {
    #[error("Subreddit name too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Subreddit name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Subreddit name contains invalid characters (only alphanumeric and underscore allowed)")]
    InvalidCharacters,
}

/// Top-level error for subreddit operations
#[derive(Debug, Clone, Error)]
pub enum SubredditError {
    #[error("Invalid subreddit name: {0}")]
    InvalidName(#[from] SubredditNameError),

    #[error("Subreddit not found: {0}")]
    NotFound(String),

    #[error("Subreddit already exists: {0}")]
    NameAlreadyExists(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
