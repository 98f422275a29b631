pub mod post;
pub mod subreddit;
pub mod user;
