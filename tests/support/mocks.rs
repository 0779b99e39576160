// tests/support/mocks.rs
use bakery_core::application::ports::security::{
    CredentialError, CredentialResult, PasswordEncoder,
};
use bakery_core::domain::user::PasswordHash;

/// Reversible stand-in for the Argon2 encoder so HTTP tests stay fast.
pub struct PlainTextEncoder;

impl PasswordEncoder for PlainTextEncoder {
    fn encode(&self, plaintext: &str) -> CredentialResult<PasswordHash> {
        PasswordHash::new(format!("{{plain}}{plaintext}"))
            .map_err(|err| CredentialError::Hashing(err.to_string()))
    }

    fn matches(&self, plaintext: &str, hash: &PasswordHash) -> CredentialResult<bool> {
        let stored = hash
            .as_str()
            .strip_prefix("{plain}")
            .ok_or_else(|| CredentialError::MalformedHash("missing {plain} prefix".into()))?;
        Ok(stored == plaintext)
    }
}
