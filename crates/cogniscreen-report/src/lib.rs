//! cogniscreen-report
//!
//! Assessment report generation: pure content assembly plus PDF output.

pub mod content;
pub mod error;
pub mod pdf;
