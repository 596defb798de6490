//! Domain logic for roll defect analytics.
//!
//! This crate has no database dependency. Rows are handed in by the caller
//! and shaped into response DTOs here.

pub mod defect_stats;
pub mod error;
pub mod roll;
pub mod types;
