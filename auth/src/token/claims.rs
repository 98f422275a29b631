use serde::Deserialize;
use serde::Serialize;

/// Payload carried by an access token.
///
/// Deliberately minimal: the subject (decimal string form of the user id),
/// the issue instant and the expiry instant, both as Unix seconds in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier, stringified integer)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject with an expiry window starting now.
    pub fn for_subject(subject: i64, issued_at: i64, expires_at: i64) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at,
            exp: expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_subject() {
        let claims = Claims::for_subject(42, 1_000, 1_000 + 86_400);

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iat, 1_000);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }
}
