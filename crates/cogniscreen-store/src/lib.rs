//! cogniscreen-store
//!
//! MongoDB operations. Thin wrapper around the `mongodb` driver: one module
//! per collection, free functions over a `Database` handle. The share-link
//! lifecycle lives here because its counter bump must be a store-side atomic
//! update.

pub use mongodb::Database;

pub mod assessments;
pub mod client;
pub mod error;
pub mod share_links;
pub mod users;
