use crate::admin::domain::{Component, PolicyScope};

/// RemediationRequest - Internal request DTO for the remediation use case
#[derive(Debug, Clone)]
pub struct RemediationRequest {
    /// Component to look up a remediation for
    pub component: Component,
    /// Policy evaluation stage, passed through to the server as-is
    pub stage: String,
    /// Application or organization whose policies apply
    pub scope: PolicyScope,
}

impl RemediationRequest {
    pub fn new(component: Component, stage: impl Into<String>, scope: PolicyScope) -> Self {
        Self {
            component,
            stage: stage.into(),
            scope,
        }
    }
}
