use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    password_hash: String,
    avatar_url: Option<String>,
    bio: Option<String>,
    is_active: bool,
    is_verified: bool,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn try_into_user(self) -> Result<User, UserError> {
        Ok(User {
            id: UserId(self.id),
            username: Username::new(self.username)?,
            email: EmailAddress::new(self.email)?,
            password_hash: self.password_hash,
            avatar_url: self.avatar_url,
            bio: self.bio,
            is_active: self.is_active,
            is_verified: self.is_verified,
            created_at: self.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, username, email, password_hash, avatar_url, bio, is_active, is_verified, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let query = format!(
            "INSERT INTO users (username, email, password_hash, avatar_url, bio) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {USER_COLUMNS}"
        );

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(user.username.as_str())
            .bind(user.email.as_str())
            .bind(&user.password_hash)
            .bind(&user.avatar_url)
            .bind(&user.bio)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        if db_err.constraint() == Some("users_username_key") {
                            return UserError::UsernameAlreadyExists(
                                user.username.as_str().to_string(),
                            );
                        }
                        if db_err.constraint() == Some("users_email_key") {
                            return UserError::EmailAlreadyExists(user.email.as_str().to_string());
                        }
                    }
                }
                UserError::DatabaseError(e.to_string())
            })?;

        row.try_into_user()
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");

        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        row.map(UserRow::try_into_user).transpose()
    }

    async fn update_password_hash(
        &self,
        id: &UserId,
        password_hash: &str,
    ) -> Result<(), UserError> {
        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| UserError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
