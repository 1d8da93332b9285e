use mongodb::bson::doc;
use mongodb::{Collection, Database};

use cogniscreen_core::models::user::User;

use crate::error::{is_duplicate_key, StoreError};

pub fn collection(db: &Database) -> Collection<User> {
    db.collection("users")
}

/// Insert a new user. A concurrent registration with the same email loses to
/// the unique index and surfaces as [`StoreError::DuplicateKey`].
pub async fn insert(db: &Database, user: &User) -> Result<(), StoreError> {
    collection(db).insert_one(user).await.map_err(|e| {
        if is_duplicate_key(&e) {
            StoreError::DuplicateKey {
                collection: "users",
            }
        } else {
            StoreError::Database(e)
        }
    })?;
    Ok(())
}

pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<User>, StoreError> {
    Ok(collection(db).find_one(doc! { "email": email }).await?)
}

pub async fn find_by_id(db: &Database, id: &str) -> Result<Option<User>, StoreError> {
    Ok(collection(db).find_one(doc! { "id": id }).await?)
}
