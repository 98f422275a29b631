use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hashing and token issuance
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = NewUser {
            username: command.username,
            email: command.email,
            password_hash,
            avatar_url: command.avatar_url,
            bio: command.bio,
        };

        self.repository.create(user).await
    }

    async fn login(&self, command: LoginCommand) -> Result<LoginOutcome, UserError> {
        let mut user = self
            .repository
            .find_by_username(&command.username)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self
            .authenticator
            .verify_password(&command.password, &user.password_hash)
        {
            return Err(UserError::InvalidCredentials);
        }

        // Opportunistic upgrade of hashes stored with outdated parameters.
        // A persistence failure here must not fail an otherwise valid login.
        if self.authenticator.password_needs_rehash(&user.password_hash) {
            let new_hash = self.authenticator.hash_password(&command.password)?;
            match self
                .repository
                .update_password_hash(&user.id, &new_hash)
                .await
            {
                Ok(()) => user.password_hash = new_hash,
                Err(e) => {
                    tracing::warn!(user_id = %user.id, error = %e, "Failed to persist rehashed password");
                }
            }
        }

        let access_token = self.authenticator.issue_token(user.id.0)?;

        Ok(LoginOutcome { user, access_token })
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use argon2::Params;
    use auth::PasswordHasher;
    use chrono::Duration;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn update_password_hash(&self, id: &UserId, password_hash: &str) -> Result<(), UserError>;
        }
    }

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn test_authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::with_password_hasher(
            SECRET,
            Duration::hours(24),
            PasswordHasher::with_params(Params::new(1024, 2, 1, None).unwrap()),
        ))
    }

    fn stored_user(id: i64, username: &str, password_hash: String) -> User {
        User {
            id: UserId(id),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(format!("{username}@example.com")).unwrap(),
            password_hash,
            avatar_url: None,
            bio: None,
            is_active: true,
            is_verified: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_create()
            .withf(|user| {
                user.username.as_str() == "testuser"
                    && user.email.as_str() == "test@example.com"
                    && user.password_hash.starts_with("$argon2")
            })
            .times(1)
            .returning(|user| {
                Ok(User {
                    id: UserId(1),
                    username: user.username,
                    email: user.email,
                    password_hash: user.password_hash,
                    avatar_url: user.avatar_url,
                    bio: user.bio,
                    is_active: true,
                    is_verified: false,
                    created_at: Utc::now(),
                })
            });

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("test@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            avatar_url: None,
            bio: None,
        };

        let user = service.register(command).await.unwrap();
        assert_eq!(user.id, UserId(1));
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut repository = MockTestUserRepository::new();

        repository.expect_create().times(1).returning(|user| {
            Err(UserError::UsernameAlreadyExists(
                user.username.as_str().to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let command = RegisterUserCommand {
            username: Username::new("testuser".to_string()).unwrap(),
            email: EmailAddress::new("other@example.com".to_string()).unwrap(),
            password: "password123".to_string(),
            avatar_url: None,
            bio: None,
        };

        assert!(matches!(
            service.register(command).await,
            Err(UserError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_login_success_issues_valid_token() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(7, "alice", hash);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), Arc::clone(&authenticator));

        let outcome = service
            .login(LoginCommand {
                username: Username::new("alice".to_string()).unwrap(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.user.id, UserId(7));
        // The issued token asserts the logged-in user as subject.
        assert_eq!(authenticator.validate_token(&outcome.access_token).unwrap(), 7);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(7, "alice", hash);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository.expect_update_password_hash().times(0);

        let service = UserService::new(Arc::new(repository), authenticator);

        let result = service
            .login(LoginCommand {
                username: Username::new("alice".to_string()).unwrap(),
                password: "wrong_password".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_username() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service
            .login(LoginCommand {
                username: Username::new("nobody".to_string()).unwrap(),
                password: "password123".to_string(),
            })
            .await;

        assert!(matches!(result, Err(UserError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_rehashes_outdated_hash() {
        // Stored hash was produced with weaker parameters than the service's
        // current targets, so a successful login must persist an upgrade.
        let weak_hasher = PasswordHasher::with_params(Params::new(1024, 1, 1, None).unwrap());
        let weak_hash = weak_hasher.hash("password123").unwrap();

        let authenticator = test_authenticator();
        assert!(authenticator.password_needs_rehash(&weak_hash));

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(7, "alice", weak_hash);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_update_password_hash()
            .withf(move |id, new_hash| *id == UserId(7) && new_hash.starts_with("$argon2"))
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserService::new(Arc::new(repository), authenticator);

        let outcome = service
            .login(LoginCommand {
                username: Username::new("alice".to_string()).unwrap(),
                password: "password123".to_string(),
            })
            .await
            .unwrap();

        assert!(!outcome.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_login_rehash_persistence_failure_is_not_fatal() {
        let weak_hasher = PasswordHasher::with_params(Params::new(1024, 1, 1, None).unwrap());
        let weak_hash = weak_hasher.hash("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(7, "alice", weak_hash);
        repository
            .expect_find_by_username()
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));
        repository
            .expect_update_password_hash()
            .times(1)
            .returning(|_, _| Err(UserError::DatabaseError("connection lost".to_string())));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        let result = service
            .login(LoginCommand {
                username: Username::new("alice".to_string()).unwrap(),
                password: "password123".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository), test_authenticator());

        assert!(matches!(
            service.get_user(&UserId(99)).await,
            Err(UserError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_get_user_by_username() {
        let authenticator = test_authenticator();
        let hash = authenticator.hash_password("password123").unwrap();

        let mut repository = MockTestUserRepository::new();
        let user = stored_user(3, "bob", hash);
        repository
            .expect_find_by_username()
            .withf(|u| u.as_str() == "bob")
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let service = UserService::new(Arc::new(repository), authenticator);

        let found = service
            .get_user_by_username(&Username::new("bob".to_string()).unwrap())
            .await
            .unwrap();
        assert_eq!(found.id, UserId(3));
    }
}
