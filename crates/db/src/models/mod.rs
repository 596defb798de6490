//! Domain model structs and DTOs.
//!
//! Each submodule contains `FromRow` + `Serialize` structs matching the
//! rows returned by the repository queries. Fractional columns stored as
//! `NUMERIC` are cast to `FLOAT8` in SQL so they decode as plain `f64`.

pub mod defect;
pub mod defect_type;
pub mod roll;
