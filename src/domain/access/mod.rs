// src/domain/access/mod.rs
pub mod pattern;
pub mod policy;
pub mod principal;

pub use pattern::RoutePattern;
pub use policy::{AccessDecision, AccessPolicy, AccessRule, Requirement, has_dot_segment};
pub use principal::Principal;
