use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenService;

/// Authentication coordinator combining password hashing and token handling.
///
/// Bundles a [`PasswordHasher`] and a [`TokenService`] behind a single
/// constructor so services wire one dependency instead of two. Stateless
/// after construction; share freely behind an `Arc`.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// # Arguments
    /// * `secret` - Symmetric token signing key
    /// * `token_validity` - Lifetime of issued tokens
    pub fn new(secret: &[u8], token_validity: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(secret, token_validity),
        }
    }

    /// Create an authenticator with a custom password hasher.
    ///
    /// Lets tests inject cheap hashing parameters without touching the
    /// production construction path.
    pub fn with_password_hasher(
        secret: &[u8],
        token_validity: Duration,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            password_hasher,
            token_service: TokenService::new(secret, token_validity),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Check whether a stored hash should be regenerated with current
    /// parameters on the next successful login.
    pub fn password_needs_rehash(&self, stored_hash: &str) -> bool {
        self.password_hasher.needs_rehash(stored_hash)
    }

    /// Issue an access token for a subject.
    ///
    /// # Errors
    /// * `TokenError` - Token signing failed
    pub fn issue_token(&self, subject: i64) -> Result<String, TokenError> {
        self.token_service.issue(subject)
    }

    /// Validate an access token and return its subject.
    ///
    /// # Errors
    /// * `Expired` - Token lifetime has elapsed
    /// * `Invalid` - Signature, structure, or subject is bad
    pub fn validate_token(&self, token: &str) -> Result<i64, TokenError> {
        self.token_service.validate(token)
    }
}
