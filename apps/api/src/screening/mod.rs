//! Résumé screening pipeline: text extraction → rubric scoring → threshold filter.

pub mod document;
pub mod evaluate;
pub mod extract;
pub mod handlers;
pub mod rubric;
pub mod scorer;

/// Accepted threshold range, mirroring what the screening UI offers.
pub const THRESHOLD_MIN: u32 = 5;
pub const THRESHOLD_MAX: u32 = 30;
