use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token encoding failed: {0}")]
    Encoding(jsonwebtoken::errors::Error),
    #[error("Invalid or expired token")]
    Invalid,
}

/// Claims carried by an issued token. `sub` is the user's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// Issues HS256-signed tokens bound to a subject, valid for a fixed window
/// from issuance. The signing secret is process-wide configuration.
pub struct TokenService {
    secret: String,
    validity: Duration,
}

impl TokenService {
    pub fn new(secret: String, validity: Duration) -> Self {
        Self { secret, validity }
    }

    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.validity).timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(TokenError::Encoding)
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret-test-secret-test1234".to_string(), Duration::hours(24))
    }

    #[test]
    fn test_issue_then_decode_round_trips_subject() {
        let service = service();

        let token = service.issue("a@x.com").unwrap();
        let claims = service.decode(&token).unwrap();

        assert_eq!(claims.sub, "a@x.com");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_decode_rejects_wrong_secret() {
        let token = service().issue("a@x.com").unwrap();

        let other = TokenService::new("another-secret-entirely-12345678".to_string(), Duration::hours(24));
        assert!(matches!(other.decode(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_decode_rejects_expired_token() {
        // Issued already past its expiry, well beyond validation leeway.
        let expired = TokenService::new(
            "test-secret-test-secret-test1234".to_string(),
            Duration::hours(-1),
        );

        let token = expired.issue("a@x.com").unwrap();
        assert!(matches!(expired.decode(&token), Err(TokenError::Invalid)));
    }
}
