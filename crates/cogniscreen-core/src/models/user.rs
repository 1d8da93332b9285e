use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::time;

/// A registered account as persisted in the `users` collection.
///
/// Carries the password hash, so it is never serialized into an API
/// response — clients only ever see a [`UserProfile`]. Users are immutable
/// after registration; there are no update or delete routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub preferred_language: String,
    #[serde(with = "time::timestamp")]
    pub created_at: Timestamp,
    pub password_hash: String,
}

impl User {
    pub fn new(
        email: String,
        name: String,
        preferred_language: String,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            name,
            preferred_language,
            created_at: Timestamp::now(),
            password_hash,
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            preferred_language: self.preferred_language.clone(),
            created_at: self.created_at,
        }
    }
}

/// The user shape serialized to clients. No secret material.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub preferred_language: String,
    #[serde(with = "time::timestamp")]
    #[ts(type = "string")]
    pub created_at: Timestamp,
}
