// src/domain/user/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const PASSWORD_HASH_MIN_LEN: usize = 4;
pub const PASSWORD_HASH_MAX_LEN: usize = 255;

/// Roles known to the bakery. `User::role` stays free text; these are the
/// values the default access policy refers to.
pub mod roles {
    pub const BARISTA: &str = "barista";
    pub const BAKER: &str = "baker";
    pub const ADMIN: &str = "admin";

    pub const ALL: [&str; 3] = [BARISTA, BAKER, ADMIN];
}

/// Stored, already-encoded password. Never compared as part of user identity.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let len = value.chars().count();
        if !(PASSWORD_HASH_MIN_LEN..=PASSWORD_HASH_MAX_LEN).contains(&len) {
            return Err(DomainError::Validation(format!(
                "password hash must be between {PASSWORD_HASH_MIN_LEN} and {PASSWORD_HASH_MAX_LEN} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

impl From<PasswordHash> for String {
    fn from(value: PasswordHash) -> Self {
        value.0
    }
}
