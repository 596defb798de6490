//! Request handlers.
//!
//! Handlers parse the request, delegate to the services in [`crate::services`]
//! and map errors via [`crate::error::AppError`].

pub mod rolls;
