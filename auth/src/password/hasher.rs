use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::errors::PasswordError;

/// Password hashing service.
///
/// Wraps Argon2id with explicit cost parameters. Hashes are emitted in PHC
/// string format, so algorithm, version, parameters and salt travel with the
/// digest and verification always uses the parameters embedded in the hash.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the library's current default parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Create a hasher with custom cost parameters.
    ///
    /// Tests use this with cheap parameters; production code should stick
    /// with [`PasswordHasher::new`] unless the deployment tunes costs.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash a plaintext password with a freshly generated random salt.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying hash computation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC hash string.
    ///
    /// Returns true only when the plaintext re-derives the digest under the
    /// hash's embedded parameters. A malformed hash string is a mismatch,
    /// not an error.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Check whether a stored hash was produced with parameters other than
    /// this hasher's current targets.
    ///
    /// True for a different algorithm, version or cost parameters, and for
    /// hashes that fail to parse at all. Callers use this to upgrade stored
    /// hashes opportunistically on the next successful login.
    pub fn needs_rehash(&self, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return true;
        };

        if parsed_hash.algorithm != Algorithm::Argon2id.ident() {
            return true;
        }

        if parsed_hash.version != Some(Version::V0x13.into()) {
            return true;
        }

        match Params::try_from(&parsed_hash) {
            Ok(params) => &params != self.argon2.params(),
            Err(_) => true,
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
