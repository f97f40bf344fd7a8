use crate::admin::domain::{Component, Remediation};
use crate::shared::Result;
use async_trait::async_trait;

/// RemediationPort - Inbound port for remediation lookups
///
/// This port defines the interface that external adapters (CLI, other
/// services) use to ask the policy server which version of a component
/// would clear its policy violations.
#[async_trait]
pub trait RemediationPort {
    /// Gets the remediation for a component under an application's policies
    ///
    /// # Arguments
    /// * `component` - Component to remediate
    /// * `stage` - Policy evaluation stage (e.g. `build`, `release`)
    /// * `application_public_id` - Public ID of the application
    ///
    /// # Errors
    /// Returns an error if:
    /// - The application cannot be resolved
    /// - The request cannot be sent or the server rejects it
    /// - The response cannot be parsed
    async fn get_remediation_by_app(
        &self,
        component: &Component,
        stage: &str,
        application_public_id: &str,
    ) -> Result<Remediation>;

    /// Gets the remediation for a component under an organization's policies
    ///
    /// # Errors
    /// Same as [`RemediationPort::get_remediation_by_app`], with the
    /// organization resolved by name instead.
    async fn get_remediation_by_org(
        &self,
        component: &Component,
        stage: &str,
        organization_name: &str,
    ) -> Result<Remediation>;
}
