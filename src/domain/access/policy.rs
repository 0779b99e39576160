// src/domain/access/policy.rs
use crate::domain::access::{pattern::RoutePattern, principal::Principal};
use crate::domain::errors::DomainResult;
use crate::domain::user::roles;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Paths served without a login: the client bundle, static assets and the
/// login page itself.
pub const PUBLIC_PATHS: &[&str] = &[
    "/VAADIN/**",
    "/favicon.ico",
    "/robots.txt",
    "/manifest.webmanifest",
    "/sw.js",
    "/offline.html",
    "/icons/**",
    "/images/**",
    "/styles/**",
    "/frontend/**",
    "/login",
];

/// Paths reserved for administrators.
pub const ADMIN_PATHS: &[&str] = &["/users/**", "/products/**"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    PermitAll,
    #[default]
    Authenticated,
    AnyRole(Vec<String>),
    DenyAll,
}

impl Requirement {
    pub fn evaluate(&self, principal: Option<&Principal>) -> AccessDecision {
        match (self, principal) {
            (Requirement::PermitAll, _) => AccessDecision::Granted,
            (Requirement::DenyAll, _) => AccessDecision::Denied,
            (_, None) => AccessDecision::LoginRequired,
            (Requirement::Authenticated, Some(_)) => AccessDecision::Granted,
            (Requirement::AnyRole(allowed), Some(principal)) => {
                if allowed.iter().any(|role| principal.has_role(role)) {
                    AccessDecision::Granted
                } else {
                    AccessDecision::Denied
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pub pattern: RoutePattern,
    pub requirement: Requirement,
}

impl AccessRule {
    pub fn new(pattern: &str, requirement: Requirement) -> DomainResult<Self> {
        Ok(Self {
            pattern: RoutePattern::new(pattern)?,
            requirement,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// Anonymous caller on a protected path.
    LoginRequired,
    Denied,
}

impl AccessDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessDecision::Granted => "granted",
            AccessDecision::LoginRequired => "login required",
            AccessDecision::Denied => "denied",
        }
    }
}

impl fmt::Display for AccessDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered access rules. The first rule whose pattern matches the request
/// path decides; unmatched paths fall back to `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    rules: Vec<AccessRule>,
    #[serde(default)]
    fallback: Requirement,
}

impl AccessPolicy {
    pub fn new(rules: Vec<AccessRule>, fallback: Requirement) -> Self {
        Self { rules, fallback }
    }

    /// Static resources and the login page are public, user and product
    /// administration is admin-only, everything else needs a login.
    pub fn bakery_default() -> DomainResult<Self> {
        let admin_only = Requirement::AnyRole(vec![roles::ADMIN.to_owned()]);
        let rules = PUBLIC_PATHS
            .iter()
            .map(|path| AccessRule::new(path, Requirement::PermitAll))
            .chain(
                ADMIN_PATHS
                    .iter()
                    .map(|path| AccessRule::new(path, admin_only.clone())),
            )
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(rules, Requirement::Authenticated))
    }

    pub fn rules(&self) -> &[AccessRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &Requirement {
        &self.fallback
    }

    /// The requirement that governs `path`, if any rule matches it.
    pub fn matching_rule(&self, path: &str) -> Option<&AccessRule> {
        self.rules.iter().find(|rule| rule.pattern.matches(path))
    }

    pub fn evaluate(&self, path: &str, principal: Option<&Principal>) -> AccessDecision {
        if has_dot_segment(path) {
            return AccessDecision::Denied;
        }

        self.matching_rule(path)
            .map_or(&self.fallback, |rule| &rule.requirement)
            .evaluate(principal)
    }
}

/// Paths with `.` or `..` segments could walk out of a public prefix, so
/// [`AccessPolicy::evaluate`] denies them before looking at any rule.
pub fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| segment == "." || segment == "..")
}
