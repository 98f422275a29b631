//! Authentication utilities library
//!
//! Provides the authentication primitives for the forum service:
//! - Password hashing (Argon2id) with a rehash-needed check
//! - Signed access token issuance and validation (HS256)
//! - An [`Authenticator`] coordinator bundling both
//!
//! Everything here is pure computation: no I/O, no logging, no shared
//! mutable state. Services construct these once at startup and share them
//! across requests.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.needs_rehash(&hash));
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = tokens.issue(42).unwrap();
//! assert_eq!(tokens.validate(&token).unwrap(), 42);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue a token
//! assert!(auth.verify_password("password123", &hash));
//! let token = auth.issue_token(42).unwrap();
//!
//! // Per request: validate the token back to its subject
//! assert_eq!(auth.validate_token(&token).unwrap(), 42);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenError;
pub use token::TokenService;
