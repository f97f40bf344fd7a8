use crate::admin::domain::{ApplicationSummary, OrganizationSummary};
use crate::shared::Result;
use async_trait::async_trait;

/// ScopeResolver port for turning human-facing names into internal IDs
///
/// Remediation endpoints are addressed by the server's internal identifier,
/// while callers know applications by public ID and organizations by name.
#[async_trait]
pub trait ScopeResolver: Send + Sync {
    /// Looks up an application by its public ID
    ///
    /// # Errors
    /// Returns an error if the lookup fails or no application has that ID
    async fn application_by_public_id(&self, public_id: &str) -> Result<ApplicationSummary>;

    /// Looks up an organization by its exact name
    ///
    /// # Errors
    /// Returns an error if the lookup fails or no organization has that name
    async fn organization_by_name(&self, name: &str) -> Result<OrganizationSummary>;
}
