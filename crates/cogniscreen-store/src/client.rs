use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Client, Database, IndexModel};

use crate::error::StoreError;

pub async fn connect(uri: &str, db_name: &str) -> Result<Database, StoreError> {
    let client = Client::with_uri_str(uri).await?;
    Ok(client.database(db_name))
}

/// Create the indexes correctness relies on. The unique email index is what
/// closes the register check-then-insert race: a losing concurrent insert is
/// rejected by the store, not by an application-level existence check.
pub async fn ensure_indexes(db: &Database) -> Result<(), StoreError> {
    let unique = || IndexOptions::builder().unique(true).build();

    crate::users::collection(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "email": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    crate::share_links::collection(db)
        .create_index(
            IndexModel::builder()
                .keys(doc! { "token": 1 })
                .options(unique())
                .build(),
        )
        .await?;

    crate::assessments::collection(db)
        .create_index(IndexModel::builder().keys(doc! { "user_id": 1 }).build())
        .await?;

    tracing::debug!("collection indexes ensured");
    Ok(())
}
