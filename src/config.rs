// src/config.rs
use std::{env, path::PathBuf, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    password_hash: PasswordHashSettings,
    access_policy_file: Option<PathBuf>,
    login_url: String,
}

/// Argon2 cost factors used for newly encoded passwords. Stored hashes carry
/// their own parameters, so changing these never invalidates existing users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PasswordHashSettings {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordHashSettings {
    fn default() -> Self {
        Self {
            memory_kib: argon2::Params::DEFAULT_M_COST,
            iterations: argon2::Params::DEFAULT_T_COST,
            parallelism: argon2::Params::DEFAULT_P_COST,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_login_url() -> String {
    "/login".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = PasswordHashSettings::default();
        let password_hash = PasswordHashSettings {
            memory_kib: parse_or(&lookup, "PASSWORD_HASH_MEMORY_KIB", defaults.memory_kib)?,
            iterations: parse_or(&lookup, "PASSWORD_HASH_ITERATIONS", defaults.iterations)?,
            parallelism: parse_or(&lookup, "PASSWORD_HASH_PARALLELISM", defaults.parallelism)?,
        };

        let access_policy_file = lookup("ACCESS_POLICY_FILE")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let login_url = lookup("LOGIN_URL").unwrap_or_else(default_login_url);
        if !login_url.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "LOGIN_URL must be an absolute path, got '{login_url}'"
            )));
        }

        Ok(Self {
            password_hash,
            access_policy_file,
            login_url,
        })
    }

    pub fn password_hash(&self) -> PasswordHashSettings {
        self.password_hash
    }

    pub fn access_policy_file(&self) -> Option<&PathBuf> {
        self.access_policy_file.as_ref()
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            password_hash: PasswordHashSettings::default(),
            access_policy_file: None,
            login_url: default_login_url(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a number, got '{raw}'"))),
    }
}
