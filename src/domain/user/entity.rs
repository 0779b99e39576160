// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::PasswordHash;
use serde::Serialize;
use std::hash::{Hash, Hasher};
use validator::{Validate, ValidationError, ValidationErrors};

/// An account of the bakery staff.
///
/// Equality and hashing cover `first_name`, `last_name`, `email` and `role`.
/// The password hash is deliberately left out: two records describing the
/// same person compare equal no matter which credential is stored for them.
#[derive(Debug, Clone, Default, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing)]
    password_hash: Option<PasswordHash>,
    #[validate(required, email, length(max = 255))]
    email: Option<String>,
    #[validate(required, length(min = 1, max = 255))]
    first_name: Option<String>,
    #[validate(required, length(min = 1, max = 255))]
    last_name: Option<String>,
    #[validate(required, length(min = 1, max = 255))]
    role: Option<String>,
}

type IdentityKey<'a> = (Option<&'a str>, Option<&'a str>, Option<&'a str>, Option<&'a str>);

impl User {
    /// Fields compared by `==` and fed to `Hash`, in that order.
    pub const IDENTITY_FIELDS: &'static [&'static str] =
        &["first_name", "last_name", "email", "role"];

    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    pub fn to_builder(&self) -> UserBuilder {
        UserBuilder {
            password_hash: self.password_hash.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role.clone(),
        }
    }

    pub fn password_hash(&self) -> Option<&PasswordHash> {
        self.password_hash.as_ref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }

    /// Check the persistence constraints. The password hash is only checked
    /// for presence; its length is enforced by `PasswordHash::new`.
    pub fn ensure_valid(&self) -> DomainResult<()> {
        let mut errors = Validate::validate(self).err().unwrap_or_else(ValidationErrors::new);
        if self.password_hash.is_none() {
            errors.add("password_hash", ValidationError::new("required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    fn identity_key(&self) -> IdentityKey<'_> {
        (
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.role.as_deref(),
        )
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserBuilder {
    password_hash: Option<PasswordHash>,
    email: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    role: Option<String>,
}

impl UserBuilder {
    pub fn password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn build(self) -> User {
        User {
            password_hash: self.password_hash,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
        }
    }
}
