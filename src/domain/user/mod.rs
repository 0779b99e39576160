// src/domain/user/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::{User, UserBuilder};
pub use value_objects::{PasswordHash, roles};
