use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::time;

pub const DEFAULT_TTL_HOURS: i64 = 48;

/// An expiring, unauthenticated grant of read access to one assessment.
///
/// The token is a UUIDv4 (122 bits of randomness). A link is valid iff
/// `now < expires_at`; `accessed_count` has no bearing on validity — there is
/// no max-use cap. Expired links are superseded by fresh ones, never reused.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareLink {
    pub id: String,
    pub assessment_id: String,
    pub token: String,
    #[serde(with = "time::timestamp")]
    #[ts(type = "string")]
    pub created_at: Timestamp,
    #[serde(with = "time::timestamp")]
    #[ts(type = "string")]
    pub expires_at: Timestamp,
    pub accessed_count: i64,
}

impl ShareLink {
    pub fn new(assessment_id: String, ttl_hours: i64) -> Result<Self, CoreError> {
        let now = Timestamp::now();
        let expires_at = now.checked_add(SignedDuration::from_hours(ttl_hours))?;
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            assessment_id,
            token: Uuid::new_v4().to_string(),
            created_at: now,
            expires_at,
            accessed_count: 0,
        })
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }
}
