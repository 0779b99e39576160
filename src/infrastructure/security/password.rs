use crate::application::ports::security::{CredentialError, CredentialResult, PasswordEncoder};
use crate::config::PasswordHashSettings;
use crate::domain::user::PasswordHash;
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        self, PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use std::fmt;

/// Upper bounds on the cost a stored hash may ask verification to pay. The
/// configured cost is always accepted, even when it is higher.
const VERIFY_MAX_MEMORY_KIB: u32 = 256 * 1024;
const VERIFY_MAX_ITERATIONS: u32 = 32;
const VERIFY_MAX_PARALLELISM: u32 = 16;

/// Argon2id encoder producing PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`).
#[derive(Clone, Debug)]
pub struct Argon2PasswordEncoder {
    params: Params,
}

impl Argon2PasswordEncoder {
    pub fn new(settings: PasswordHashSettings) -> CredentialResult<Self> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|err| CredentialError::Hashing(format!("invalid argon2 parameters: {err}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    fn check_verify_cost(&self, parsed: &PhcString<'_>) -> CredentialResult<()> {
        let stored = Params::try_from(parsed).map_err(malformed)?;
        let too_costly = stored.m_cost() > VERIFY_MAX_MEMORY_KIB.max(self.params.m_cost())
            || stored.t_cost() > VERIFY_MAX_ITERATIONS.max(self.params.t_cost())
            || stored.p_cost() > VERIFY_MAX_PARALLELISM.max(self.params.p_cost());
        if too_costly {
            return Err(malformed(format!(
                "stored cost m={},t={},p={} exceeds the verification limit",
                stored.m_cost(),
                stored.t_cost(),
                stored.p_cost()
            )));
        }
        Ok(())
    }
}

impl PasswordEncoder for Argon2PasswordEncoder {
    fn encode(&self, plaintext: &str) -> CredentialResult<PasswordHash> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|err| CredentialError::Hashing(err.to_string()))?
            .to_string();
        tracing::debug!(
            m_cost = self.params.m_cost(),
            t_cost = self.params.t_cost(),
            p_cost = self.params.p_cost(),
            "password encoded"
        );
        PasswordHash::new(encoded).map_err(|err| CredentialError::Hashing(err.to_string()))
    }

    fn matches(&self, plaintext: &str, hash: &PasswordHash) -> CredentialResult<bool> {
        // Verification uses the algorithm and cost recorded in the hash itself.
        let parsed = PhcString::new(hash.as_str()).map_err(malformed)?;
        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(malformed("hash carries no salt or output"));
        }
        self.check_verify_cost(&parsed)?;
        match self.argon2().verify_password(plaintext.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(malformed(err)),
        }
    }
}

fn malformed(err: impl fmt::Display) -> CredentialError {
    tracing::warn!(error = %err, "stored password hash could not be interpreted");
    CredentialError::MalformedHash(err.to_string())
}
