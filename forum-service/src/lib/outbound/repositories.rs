pub mod post;
pub mod subreddit;
pub mod user;

pub use post::PostgresPostRepository;
pub use subreddit::PostgresSubredditRepository;
pub use user::PostgresUserRepository;
