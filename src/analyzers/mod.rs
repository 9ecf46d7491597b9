//! Scoring and aggregation.
//!
//! Averages test scores, maps final scores to letter grades, and finds the
//! top student overall and per institution.

pub mod aggregate;
pub mod grade;
pub mod utility;
