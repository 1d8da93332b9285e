//! cogniscreen-auth
//!
//! Credential service: argon2 password hashing and HS256 bearer tokens.
//! Stateless — nothing here touches storage.

pub mod error;
pub mod password;
pub mod tokens;
