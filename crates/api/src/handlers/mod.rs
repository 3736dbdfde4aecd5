//! Request handlers.
//!
//! Handlers delegate to the corresponding repository in `connect_db` and map
//! errors via [`crate::error::AppError`].

pub mod roles;
