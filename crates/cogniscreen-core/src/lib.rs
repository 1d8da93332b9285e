//! cogniscreen-core
//!
//! Pure domain types, the scoring engine, and timestamp conventions.
//! No I/O dependency — this is the shared vocabulary of the cogniscreen
//! service.

pub mod error;
pub mod models;
pub mod scoring;
pub mod time;
