use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier the policy server assigns to applications and organizations
///
/// Only ever produced by a scope lookup and substituted into endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternalId(String);

impl InternalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Policy scope a remediation is evaluated against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyScope {
    /// Application, addressed by its public ID
    Application(String),
    /// Organization, addressed by its name
    Organization(String),
}

impl PolicyScope {
    /// Scope label used in endpoint paths and error messages
    pub fn label(&self) -> &'static str {
        match self {
            PolicyScope::Application(_) => "application",
            PolicyScope::Organization(_) => "organization",
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            PolicyScope::Application(id) | PolicyScope::Organization(id) => id,
        }
    }
}

/// Application record returned by the policy server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSummary {
    pub id: InternalId,
    pub public_id: String,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<InternalId>,
}

/// Organization record returned by the policy server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationSummary {
    pub id: InternalId,
    pub name: String,
}
