// src/application/services/mod.rs
use std::{fs, path::Path, sync::Arc};

use crate::{
    application::{
        ApplicationResult,
        error::ApplicationError,
        ports::security::PasswordEncoder,
    },
    config::AppConfig,
    domain::access::AccessPolicy,
    infrastructure::security::password::Argon2PasswordEncoder,
};

/// Process-wide security collaborators handed to the web layer.
#[derive(Clone)]
pub struct SecurityServices {
    password_encoder: Arc<dyn PasswordEncoder>,
    access_policy: Arc<AccessPolicy>,
    login_url: Arc<str>,
}

impl SecurityServices {
    pub fn new(
        password_encoder: Arc<dyn PasswordEncoder>,
        access_policy: Arc<AccessPolicy>,
        login_url: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            password_encoder,
            access_policy,
            login_url: login_url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> ApplicationResult<Self> {
        let password_encoder: Arc<dyn PasswordEncoder> =
            Arc::new(Argon2PasswordEncoder::new(config.password_hash())?);

        let access_policy = match config.access_policy_file() {
            Some(path) => load_access_policy(path)?,
            None => AccessPolicy::bakery_default()?,
        };
        let source = config
            .access_policy_file()
            .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string());
        tracing::info!(
            rules = access_policy.rules().len(),
            %source,
            "access policy loaded"
        );

        Ok(Self::new(
            password_encoder,
            Arc::new(access_policy),
            config.login_url(),
        ))
    }

    pub fn password_encoder(&self) -> Arc<dyn PasswordEncoder> {
        Arc::clone(&self.password_encoder)
    }

    pub fn access_policy(&self) -> Arc<AccessPolicy> {
        Arc::clone(&self.access_policy)
    }

    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

/// Read a JSON policy document: `{ "rules": [...], "fallback": ... }`.
pub fn load_access_policy(path: &Path) -> ApplicationResult<AccessPolicy> {
    let raw = fs::read_to_string(path).map_err(|err| {
        ApplicationError::infrastructure(format!(
            "cannot read access policy {}: {err}",
            path.display()
        ))
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        ApplicationError::infrastructure(format!(
            "cannot parse access policy {}: {err}",
            path.display()
        ))
    })
}
