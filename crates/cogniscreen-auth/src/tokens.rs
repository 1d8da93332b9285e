use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

pub const DEFAULT_TTL_HOURS: i64 = 24;

/// Claims carried by a bearer token. `sub` is the user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 bearer tokens. Holds only key material and the
/// TTL — no storage, no session state.
#[derive(Clone)]
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: SignedDuration,
}

impl TokenSigner {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: SignedDuration::from_hours(ttl_hours),
        }
    }

    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let now = Timestamp::now();
        let expires = now
            .checked_add(self.ttl)
            .map_err(|_| AuthError::TtlOutOfRange)?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.as_second(),
            exp: expires.as_second(),
        };
        tracing::debug!(user_id, "issuing bearer token");
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AuthError::TokenEncode)
    }

    /// Malformed, bad-signature and expired tokens all collapse to
    /// [`AuthError::InvalidToken`]; the reason is never surfaced.
    pub fn decode(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
