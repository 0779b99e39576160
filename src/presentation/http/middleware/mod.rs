// src/presentation/http/middleware/mod.rs
pub mod access_policy;

pub use access_policy::enforce_access_policy;
