use super::component::Component;
use serde::{Deserialize, Serialize};
use std::fmt;

const NEXT_NO_VIOLATIONS: &str = "next-no-violations";
const NEXT_NON_FAILING: &str = "next-non-failing";

/// Kind of version change suggested by the policy server
///
/// Tags the server sends that this crate does not know about are kept
/// verbatim so that newer servers never break decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RemediationType {
    /// The next version with no policy violations at all
    NextNoViolations,
    /// The next version whose violations do not fail the stage
    NextNonFailing,
    Other(String),
}

impl RemediationType {
    pub fn as_str(&self) -> &str {
        match self {
            RemediationType::NextNoViolations => NEXT_NO_VIOLATIONS,
            RemediationType::NextNonFailing => NEXT_NON_FAILING,
            RemediationType::Other(tag) => tag,
        }
    }
}

impl From<String> for RemediationType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            NEXT_NO_VIOLATIONS => RemediationType::NextNoViolations,
            NEXT_NON_FAILING => RemediationType::NextNonFailing,
            _ => RemediationType::Other(tag),
        }
    }
}

impl From<RemediationType> for String {
    fn from(kind: RemediationType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for RemediationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of a version change: the component to move to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationData {
    pub component: Component,
}

/// A single suggested change of component version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemediationVersionChange {
    #[serde(rename = "type")]
    pub kind: RemediationType,
    pub data: RemediationData,
}

impl RemediationVersionChange {
    pub fn new(kind: RemediationType, component: Component) -> Self {
        Self {
            kind,
            data: RemediationData { component },
        }
    }

    pub fn component(&self) -> &Component {
        &self.data.component
    }
}

/// Remediation plan for a component, ordered as ranked by the server
#[derive(Debug, Clone, Default, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remediation {
    #[serde(default)]
    pub version_changes: Vec<RemediationVersionChange>,
}

impl Remediation {
    pub fn new(version_changes: Vec<RemediationVersionChange>) -> Self {
        Self { version_changes }
    }

    pub fn is_empty(&self) -> bool {
        self.version_changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.version_changes.len()
    }

    /// First suggestion of the given kind, if the server offered one
    pub fn find(&self, kind: &RemediationType) -> Option<&RemediationVersionChange> {
        self.version_changes.iter().find(|change| &change.kind == kind)
    }
}

impl PartialEq for Remediation {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.version_changes.len() == other.version_changes.len()
            && self
                .version_changes
                .iter()
                .zip(&other.version_changes)
                .all(|(a, b)| a == b)
    }
}

/// Envelope the remediation endpoints wrap their answer in
#[derive(Debug, Deserialize)]
pub(crate) struct RemediationResponse {
    pub remediation: Remediation,
}
