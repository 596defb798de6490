//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument. Errors are returned as
//! `sqlx::Error` without translation.

pub mod defect_repo;
pub mod roll_repo;

pub use defect_repo::DefectRepo;
pub use roll_repo::RollRepo;
