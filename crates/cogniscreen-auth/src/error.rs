use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Malformed, unsigned, tampered or expired — callers never learn which.
    #[error("invalid or expired token")]
    InvalidToken,

    #[error("token encoding failed: {0}")]
    TokenEncode(jsonwebtoken::errors::Error),

    #[error("token ttl out of range")]
    TtlOutOfRange,

    #[error("password hashing failed: {0}")]
    Hash(argon2::password_hash::Error),
}
