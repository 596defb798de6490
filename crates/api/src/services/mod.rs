//! Business layer between the HTTP handlers and the data-access store.

pub mod defects;

pub use defects::{DefectsService, ServiceError};
