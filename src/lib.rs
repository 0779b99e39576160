//! Security and entity-identity core of the bakery order-management backend.
//!
//! - **domain**: `Product` and `User` with value equality over explicit
//!   identity fields, and the declarative access policy.
//! - **application**: the `PasswordEncoder` port and the `SecurityServices`
//!   container handed to the web layer.
//! - **infrastructure**: the Argon2 encoder.
//! - **presentation**: axum middleware enforcing the access policy.
//! - **config**: environment-driven settings.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
