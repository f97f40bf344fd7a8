use crate::admin::domain::{Component, InternalId, PolicyScope, Remediation, RemediationResponse};
use crate::application::dto::RemediationRequest;
use crate::ports::inbound::RemediationPort;
use crate::ports::outbound::{IqClient, ScopeResolver};
use crate::shared::{AdminError, Result};
use async_trait::async_trait;
use tracing::{debug, info};

const REMEDIATION_BY_APP: &str = "api/v2/components/remediation/application";
const REMEDIATION_BY_ORG: &str = "api/v2/components/remediation/organization";

/// Builds the scoped remediation endpoint for a resolved internal ID
///
/// The stage is not validated, only percent-encoded for the query string.
pub fn remediation_endpoint(scope: &PolicyScope, id: &InternalId, stage: &str) -> String {
    let base = match scope {
        PolicyScope::Application(_) => REMEDIATION_BY_APP,
        PolicyScope::Organization(_) => REMEDIATION_BY_ORG,
    };

    format!(
        "{}/{}?stageId={}",
        base,
        urlencoding::encode(id.as_str()),
        urlencoding::encode(stage)
    )
}

/// GetRemediationUseCase - Looks up version remediations on the policy server
///
/// Each execution resolves the scope, posts the component once and decodes
/// the answer. Nothing is retried or cached.
///
/// # Type Parameters
/// * `C` - IqClient implementation
/// * `R` - ScopeResolver implementation
pub struct GetRemediationUseCase<C, R> {
    iq_client: C,
    scope_resolver: R,
}

impl<C, R> GetRemediationUseCase<C, R>
where
    C: IqClient,
    R: ScopeResolver,
{
    pub fn new(iq_client: C, scope_resolver: R) -> Self {
        Self {
            iq_client,
            scope_resolver,
        }
    }

    /// Executes the remediation lookup
    ///
    /// # Returns
    /// The remediation, which may contain no version changes at all
    pub async fn execute(&self, request: RemediationRequest) -> Result<Remediation> {
        let id = self.resolve(&request.scope).await?;
        let endpoint = remediation_endpoint(&request.scope, &id, &request.stage);
        debug!(scope = request.scope.label(), id = %id, "Resolved policy scope");

        let remediation = self.fetch(&request.component, &endpoint).await?;
        info!(
            scope = request.scope.label(),
            suggestions = remediation.len(),
            "Received remediation"
        );
        Ok(remediation)
    }

    async fn resolve(&self, scope: &PolicyScope) -> Result<InternalId> {
        let resolved = match scope {
            PolicyScope::Application(public_id) => self
                .scope_resolver
                .application_by_public_id(public_id)
                .await
                .map(|app| app.id),
            PolicyScope::Organization(name) => self
                .scope_resolver
                .organization_by_name(name)
                .await
                .map(|org| org.id),
        };

        resolved.map_err(|source| {
            AdminError::Resolution {
                scope: scope.label(),
                identifier: scope.identifier().to_string(),
                source,
            }
            .into()
        })
    }

    async fn fetch(&self, component: &Component, endpoint: &str) -> Result<Remediation> {
        let body = serde_json::to_vec(component).map_err(|e| AdminError::Encoding {
            operation: "remediation",
            source: e.into(),
        })?;

        let response = self
            .iq_client
            .post(endpoint, body)
            .await
            .map_err(|source| AdminError::Transport {
                operation: "get remediation",
                source,
            })?;

        let decoded: RemediationResponse =
            serde_json::from_slice(&response).map_err(|e| AdminError::Decoding {
                operation: "remediation",
                source: e.into(),
            })?;

        Ok(decoded.remediation)
    }
}

#[async_trait]
impl<C, R> RemediationPort for GetRemediationUseCase<C, R>
where
    C: IqClient,
    R: ScopeResolver,
{
    async fn get_remediation_by_app(
        &self,
        component: &Component,
        stage: &str,
        application_public_id: &str,
    ) -> Result<Remediation> {
        self.execute(RemediationRequest::new(
            component.clone(),
            stage,
            PolicyScope::Application(application_public_id.to_string()),
        ))
        .await
    }

    async fn get_remediation_by_org(
        &self,
        component: &Component,
        stage: &str,
        organization_name: &str,
    ) -> Result<Remediation> {
        self.execute(RemediationRequest::new(
            component.clone(),
            stage,
            PolicyScope::Organization(organization_name.to_string()),
        ))
        .await
    }
}
