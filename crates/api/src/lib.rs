//! SmartSchool Connect user service library.
//!
//! Exposes configuration, startup, state, error handling and routes so the
//! binary entrypoint and integration tests share the same building blocks.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod startup;
pub mod state;
