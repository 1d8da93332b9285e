use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Collection, Database};

use cogniscreen_core::models::assessment::Assessment;

use crate::error::StoreError;

pub fn collection(db: &Database) -> Collection<Assessment> {
    db.collection("assessments")
}

pub async fn insert(db: &Database, assessment: &Assessment) -> Result<(), StoreError> {
    collection(db).insert_one(assessment).await?;
    Ok(())
}

/// One page of a user's assessments, newest test first, plus the total count
/// across all pages.
pub async fn history(
    db: &Database,
    user_id: &str,
    limit: i64,
    skip: u64,
) -> Result<(Vec<Assessment>, u64), StoreError> {
    let filter = doc! { "user_id": user_id };
    let page: Vec<Assessment> = collection(db)
        .find(filter.clone())
        .sort(doc! { "test_date": -1 })
        .skip(skip)
        .limit(limit)
        .await?
        .try_collect()
        .await?;
    let total_count = collection(db).count_documents(filter).await?;
    Ok((page, total_count))
}

pub async fn latest(db: &Database, user_id: &str) -> Result<Option<Assessment>, StoreError> {
    Ok(collection(db)
        .find_one(doc! { "user_id": user_id })
        .sort(doc! { "test_date": -1 })
        .await?)
}

/// Owner-scoped fetch: a non-owner gets `None`, indistinguishable from a
/// missing id.
pub async fn find_owned(
    db: &Database,
    id: &str,
    user_id: &str,
) -> Result<Option<Assessment>, StoreError> {
    Ok(collection(db)
        .find_one(doc! { "id": id, "user_id": user_id })
        .await?)
}

pub async fn find_by_id(db: &Database, id: &str) -> Result<Option<Assessment>, StoreError> {
    Ok(collection(db).find_one(doc! { "id": id }).await?)
}
