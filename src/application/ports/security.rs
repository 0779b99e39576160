// src/application/ports/security.rs
use crate::domain::user::PasswordHash;
use thiserror::Error;

pub type CredentialResult<T> = Result<T, CredentialError>;

#[derive(Debug, Error)]
pub enum CredentialError {
    /// The stored hash is not in a format the encoder understands.
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Turns plaintext passwords into stored hashes and checks candidates
/// against them.
///
/// Implementations hold no mutable state and are shared across request
/// handlers behind an `Arc`.
pub trait PasswordEncoder: Send + Sync {
    /// Hash `plaintext` with a fresh random salt. Two calls with the same
    /// input give different hashes.
    fn encode(&self, plaintext: &str) -> CredentialResult<PasswordHash>;

    /// `Ok(false)` for a wrong password; `Err(MalformedHash)` only when the
    /// stored hash itself cannot be interpreted.
    fn matches(&self, plaintext: &str, hash: &PasswordHash) -> CredentialResult<bool>;
}
