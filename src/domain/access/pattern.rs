// src/domain/access/pattern.rs
use crate::domain::errors::{DomainError, DomainResult};
use globset::{GlobBuilder, GlobMatcher};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ant-style request path pattern.
///
/// `*` matches within a single path segment, `**` spans any number of
/// segments. A trailing `/**` also matches the bare prefix, so `/VAADIN/**`
/// covers `/VAADIN` itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoutePattern {
    raw: String,
    matcher: GlobMatcher,
    bare_prefix: Option<String>,
}

impl RoutePattern {
    pub fn new(pattern: impl Into<String>) -> DomainResult<Self> {
        let raw = pattern.into();
        if !raw.starts_with('/') {
            return Err(DomainError::InvalidPattern {
                pattern: raw,
                reason: "pattern must start with '/'".into(),
            });
        }

        let glob = GlobBuilder::new(&raw)
            .literal_separator(true)
            .build()
            .map_err(|err| DomainError::InvalidPattern {
                pattern: raw.clone(),
                reason: err.kind().to_string(),
            })?;

        let bare_prefix = raw
            .strip_suffix("/**")
            .filter(|prefix| !prefix.is_empty())
            .map(str::to_owned);

        Ok(Self {
            matcher: glob.compile_matcher(),
            raw,
            bare_prefix,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.bare_prefix.as_deref() == Some(path) || self.matcher.is_match(path)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RoutePattern {}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for RoutePattern {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoutePattern> for String {
    fn from(value: RoutePattern) -> Self {
        value.raw
    }
}
