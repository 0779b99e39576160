// src/domain/access/principal.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::User;

/// The caller as seen by the access policy. Produced by whatever
/// authenticates the request; the policy only looks at the role.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Principal {
    pub email: String,
    pub role: String,
}

impl Principal {
    pub fn new(email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: role.into(),
        }
    }

    pub fn from_user(user: &User) -> DomainResult<Self> {
        let email = user
            .email()
            .ok_or_else(|| DomainError::Validation("user has no email".into()))?;
        let role = user
            .role()
            .ok_or_else(|| DomainError::Validation("user has no role".into()))?;
        Ok(Self::new(email, role))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }
}
