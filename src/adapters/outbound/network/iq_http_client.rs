use super::connection::{ConnectionSettings, ServerConnection};
use crate::admin::domain::{ApplicationSummary, OrganizationSummary};
use crate::ports::outbound::{IqClient, ScopeResolver};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

const APPLICATIONS_API: &str = "api/v2/applications";
const ORGANIZATIONS_API: &str = "api/v2/organizations";

#[derive(Debug, Deserialize)]
struct ApplicationsResponse {
    #[serde(default)]
    applications: Vec<ApplicationSummary>,
}

#[derive(Debug, Deserialize)]
struct OrganizationsResponse {
    #[serde(default)]
    organizations: Vec<OrganizationSummary>,
}

/// IqHttpClient adapter for the policy server REST API
///
/// Implements both the raw `IqClient` port used for remediation requests
/// and the `ScopeResolver` port backed by the application and organization
/// listing endpoints. Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct IqHttpClient {
    connection: ServerConnection,
}

impl IqHttpClient {
    /// Creates a client for the policy server described by `settings`
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        Ok(Self {
            connection: ServerConnection::new(settings)?,
        })
    }
}

#[async_trait]
impl IqClient for IqHttpClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        debug!(path, "GET");
        self.connection
            .send(self.connection.request(Method::GET, path))
            .await
    }

    async fn post(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        debug!(path, "POST");
        let request = self
            .connection
            .request(Method::POST, path)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.connection.send(request).await
    }
}

#[async_trait]
impl ScopeResolver for IqHttpClient {
    async fn application_by_public_id(&self, public_id: &str) -> Result<ApplicationSummary> {
        let path = format!(
            "{}?publicId={}",
            APPLICATIONS_API,
            urlencoding::encode(public_id)
        );
        let body = self.get(&path).await?;
        let response: ApplicationsResponse = serde_json::from_slice(&body)?;

        response
            .applications
            .into_iter()
            .find(|app| app.public_id == public_id)
            .ok_or_else(|| anyhow::anyhow!("No application found with public ID '{}'", public_id))
    }

    async fn organization_by_name(&self, name: &str) -> Result<OrganizationSummary> {
        let body = self.get(ORGANIZATIONS_API).await?;
        let response: OrganizationsResponse = serde_json::from_slice(&body)?;

        response
            .organizations
            .into_iter()
            .find(|org| org.name == name)
            .ok_or_else(|| anyhow::anyhow!("No organization found with name '{}'", name))
    }
}
