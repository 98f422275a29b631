use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed access tokens.
///
/// Tokens are HS256-signed JWTs carrying [`Claims`]. The signing secret is
/// injected at construction and never read from ambient state; rotating it
/// requires building a new service and invalidates every outstanding token.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    validity: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - Symmetric signing key (at least 32 bytes for HS256)
    /// * `validity` - How long issued tokens remain valid
    pub fn new(secret: &[u8], validity: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            validity,
        }
    }

    /// Issue a signed token asserting `subject`.
    ///
    /// The payload is `{sub: subject, iat: now, exp: now + validity}` with
    /// UTC wall-clock timestamps.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires_at = now + self.validity;
        let claims = Claims::for_subject(subject, now.timestamp(), expires_at.timestamp());

        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Validate a token and return the subject it asserts.
    ///
    /// Signature is checked first, then expiry against UTC wall-clock time
    /// with no leeway, then the subject is parsed as an integer. Every
    /// failure mode is a typed error; nothing unwinds past this boundary.
    ///
    /// # Errors
    /// * `Expired` - `exp` lies in the past
    /// * `Invalid` - Bad signature, structural corruption, or non-integer subject
    pub fn validate(&self, token: &str) -> Result<i64, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Exact expiry boundary, no grace window.
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| TokenError::Invalid)
    }
}
