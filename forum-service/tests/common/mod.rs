use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use argon2::Params;
use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use axum::body::Body;
use axum::http::header;
use axum::http::Request;
use axum::http::StatusCode;
use axum::Router;
use chrono::Duration;
use chrono::Utc;
use forum_service::domain::post::errors::PostError;
use forum_service::domain::post::models::CreatePostCommand;
use forum_service::domain::post::models::Post;
use forum_service::domain::post::models::PostId;
use forum_service::domain::post::ports::PostServicePort;
use forum_service::domain::subreddit::errors::SubredditError;
use forum_service::domain::subreddit::models::CreateSubredditCommand;
use forum_service::domain::subreddit::models::Subreddit;
use forum_service::domain::subreddit::models::SubredditName;
use forum_service::domain::subreddit::ports::SubredditServicePort;
use forum_service::domain::user::errors::UserError;
use forum_service::domain::user::models::EmailAddress;
use forum_service::domain::user::models::LoginCommand;
use forum_service::domain::user::models::LoginOutcome;
use forum_service::domain::user::models::NewUser;
use forum_service::domain::user::models::RegisterUserCommand;
use forum_service::domain::user::models::User;
use forum_service::domain::user::models::UserId;
use forum_service::domain::user::models::Username;
use forum_service::domain::user::ports::UserRepository;
use forum_service::domain::user::ports::UserServicePort;
use forum_service::inbound::http::router::create_router;
use mockall::mock;
use tower::util::ServiceExt;

pub const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

mock! {
    pub UserService {}

    #[async_trait]
    impl UserServicePort for UserService {
        async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;
        async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError>;
        async fn get_user(&self, id: &UserId) -> Result<User, UserError>;
        async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
    }
}

mock! {
    pub SubredditService {}

    #[async_trait]
    impl SubredditServicePort for SubredditService {
        async fn create_subreddit(
            &self,
            command: CreateSubredditCommand,
            owner: UserId,
        ) -> Result<Subreddit, SubredditError>;
        async fn list_subreddits(&self) -> Result<Vec<Subreddit>, SubredditError>;
        async fn get_subreddit(&self, name: &SubredditName) -> Result<Subreddit, SubredditError>;
    }
}

mock! {
    pub PostService {}

    #[async_trait]
    impl PostServicePort for PostService {
        async fn create_post(
            &self,
            subreddit_name: &SubredditName,
            command: CreatePostCommand,
            author: UserId,
        ) -> Result<Post, PostError>;
        async fn get_post(&self, id: &PostId) -> Result<Post, PostError>;
        async fn list_posts(&self, subreddit_name: &SubredditName) -> Result<Vec<Post>, PostError>;
    }
}

/// Authenticator with cheap hashing parameters for fast tests.
pub fn test_authenticator() -> Arc<Authenticator> {
    Arc::new(Authenticator::with_password_hasher(
        SECRET,
        Duration::hours(24),
        PasswordHasher::with_params(Params::new(1024, 2, 1, None).unwrap()),
    ))
}

pub fn test_user(id: i64, username: &str) -> User {
    User {
        id: UserId(id),
        username: Username::new(username.to_string()).unwrap(),
        email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
        password_hash: "$argon2id$placeholder".to_string(),
        avatar_url: None,
        bio: None,
        is_active: true,
        is_verified: false,
        created_at: Utc::now(),
    }
}

/// In-process application under test: the real router with injected ports.
pub struct TestApp {
    pub router: Router,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    pub fn new(
        user_service: Arc<dyn UserServicePort>,
        subreddit_service: MockSubredditService,
        post_service: MockPostService,
    ) -> Self {
        let authenticator = test_authenticator();
        let router = create_router(
            user_service,
            Arc::new(subreddit_service),
            Arc::new(post_service),
            Arc::clone(&authenticator),
        );
        Self {
            router,
            authenticator,
        }
    }

    pub fn with_mocks(
        user_service: MockUserService,
        subreddit_service: MockSubredditService,
        post_service: MockPostService,
    ) -> Self {
        Self::new(Arc::new(user_service), subreddit_service, post_service)
    }

    /// Run a single request through the router and decode the JSON body.
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        let body = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Failed to parse response body")
        };
        (status, body)
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_with_auth(
    uri: &str,
    body: &serde_json::Value,
    authorization: &str,
) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, authorization)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Users held in memory, for scenarios that need real registration and
/// login flows without a database.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut users = self.users.lock().unwrap();

        if users.iter().any(|u| u.username == user.username) {
            return Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(
                user.email.as_str().to_string(),
            ));
        }

        let created = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            avatar_url: user.avatar_url,
            bio: user.bio,
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
        };
        users.push(created.clone());

        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == *username).cloned())
    }

    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let mut users = self.users.lock().unwrap();
        match users.iter_mut().find(|u| u.id == *id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(UserError::NotFound(id.to_string())),
        }
    }
}
