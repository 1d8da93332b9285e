//! Share-link lifecycle: issuance, lookup, expiry, access counting.

use jiff::Timestamp;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use cogniscreen_core::models::share_link::ShareLink;
use cogniscreen_core::time;

use crate::error::{is_duplicate_key, StoreError};

pub fn collection(db: &Database) -> Collection<ShareLink> {
    db.collection("share_links")
}

/// Outcome of dereferencing a share token. Expired is distinct from unknown:
/// the holder of a real-but-stale link learns it lapsed (410), not that it
/// never existed (404).
#[derive(Debug)]
pub enum ShareAccess {
    Active(ShareLink),
    Expired,
    Unknown,
}

/// Return the assessment's still-valid link if one exists, otherwise mint a
/// new one. Reuse-wins: an existing link comes back unchanged — its TTL is
/// not reset and a longer `ttl_hours` on a repeat call is ignored. Expired
/// rows are left in place and simply superseded.
pub async fn get_or_create(
    db: &Database,
    assessment_id: &str,
    ttl_hours: i64,
) -> Result<ShareLink, StoreError> {
    let now = Timestamp::now();
    let active = collection(db)
        .find_one(doc! {
            "assessment_id": assessment_id,
            "expires_at": { "$gt": time::to_fixed(now) },
        })
        .await?;
    if let Some(link) = active {
        return Ok(link);
    }

    let link = ShareLink::new(assessment_id.to_string(), ttl_hours)?;
    collection(db).insert_one(&link).await.map_err(|e| {
        if is_duplicate_key(&e) {
            StoreError::DuplicateKey {
                collection: "share_links",
            }
        } else {
            StoreError::Database(e)
        }
    })?;
    tracing::info!(assessment_id, expires_at = %link.expires_at, "share link minted");
    Ok(link)
}

/// Three-way resolve. On success the counter bump is a single `$inc` against
/// the store, so N concurrent viewers of the same token count exactly N —
/// there is no fetch-then-write window.
pub async fn resolve(db: &Database, token: &str) -> Result<ShareAccess, StoreError> {
    let Some(mut link) = collection(db).find_one(doc! { "token": token }).await? else {
        return Ok(ShareAccess::Unknown);
    };

    if link.is_expired(Timestamp::now()) {
        return Ok(ShareAccess::Expired);
    }

    collection(db)
        .update_one(
            doc! { "token": token },
            doc! { "$inc": { "accessed_count": 1 } },
        )
        .await?;
    link.accessed_count += 1;
    Ok(ShareAccess::Active(link))
}
