//! Domain types and startup logic for the SmartSchool Connect user service.
//!
//! This crate has no database or HTTP dependencies. Storage is reached
//! through the [`seeding::RoleStore`] trait, implemented by `connect-db`.

pub mod error;
pub mod roles;
pub mod seeding;
pub mod types;
