use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique-index violation (MongoDB write error code 11000).
    #[error("duplicate key in {collection}")]
    DuplicateKey { collection: &'static str },

    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error(transparent)]
    Core(#[from] cogniscreen_core::error::CoreError),
}

pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) if write_error.code == 11000
    )
}
