//! Bearer token issue and verification
//!
//! Tokens are HS256 JWTs carrying the user id, username and superuser
//! flag so the extractors can rebuild the request identity without a
//! database round trip.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by every issued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    /// Username at issue time
    pub username: String,
    /// Whether the user was a superuser at issue time
    pub is_superuser: bool,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Issue a token for a user
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    username: &str,
    is_superuser: bool,
    ttl_seconds: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        is_superuser,
        iat: now,
        exp: now + ttl_seconds,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Verify a token and return its claims
///
/// Expired or tampered tokens fail verification.
pub fn verify_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_verifies() {
        let id = Uuid::new_v4();
        let token = issue_token(SECRET, id, "maria", false, 3600).unwrap();
        let claims = verify_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.username, "maria");
        assert!(!claims.is_superuser);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(SECRET, Uuid::new_v4(), "maria", false, 3600).unwrap();
        assert!(verify_token("other-secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token(SECRET, Uuid::new_v4(), "maria", false, -120).unwrap();
        assert!(verify_token(SECRET, &token).is_err());
    }

    #[test]
    fn superuser_flag_round_trips() {
        let token = issue_token(SECRET, Uuid::new_v4(), "admin", true, 3600).unwrap();
        let claims = verify_token(SECRET, &token).unwrap();
        assert!(claims.is_superuser);
    }
}
