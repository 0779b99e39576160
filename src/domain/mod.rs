// src/domain/mod.rs
pub mod access;
pub mod errors;
pub mod product;
pub mod user;
