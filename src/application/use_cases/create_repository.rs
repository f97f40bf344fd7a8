use crate::admin::domain::{
    GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig, RepositoryFormat,
    RepositoryKind,
};
use crate::application::dto::{RepositoryRequest, RepositorySpec};
use crate::ports::inbound::ProvisioningPort;
use crate::ports::outbound::ScriptRunner;
use crate::shared::{AdminError, Result};
use async_trait::async_trait;
use tracing::{debug, info};

/// CreateRepositoryUseCase - Provisions repositories on the repository manager
///
/// Renders the creation statement for the requested kind and format and
/// submits it as a one-shot script. Rendering problems abort before anything
/// is sent to the server.
///
/// # Type Parameters
/// * `S` - ScriptRunner implementation
pub struct CreateRepositoryUseCase<S> {
    script_runner: S,
}

impl<S: ScriptRunner> CreateRepositoryUseCase<S> {
    pub fn new(script_runner: S) -> Self {
        Self { script_runner }
    }

    /// Executes the repository creation
    pub async fn execute(&self, request: RepositoryRequest) -> Result<()> {
        let statement = request.render()?;
        self.submit(request.spec.kind(), request.format, &statement)
            .await
    }

    async fn submit(
        &self,
        kind: RepositoryKind,
        format: RepositoryFormat,
        statement: &str,
    ) -> Result<()> {
        debug!(kind = %kind, format = %format, "Submitting repository creation script");

        match self.script_runner.run_script_once(statement, None).await {
            Ok(result) => {
                info!(kind = %kind, format = %format, "Created repository");
                debug!(result_bytes = result.len(), "Script finished");
                Ok(())
            }
            Err(source) => Err(AdminError::Execution {
                kind: kind.to_string(),
                source,
            }
            .into()),
        }
    }
}

#[async_trait]
impl<S: ScriptRunner> ProvisioningPort for CreateRepositoryUseCase<S> {
    async fn create_hosted_repository(
        &self,
        format: RepositoryFormat,
        config: &HostedRepositoryConfig,
    ) -> Result<()> {
        self.execute(RepositoryRequest::new(
            format,
            RepositorySpec::Hosted(config.clone()),
        ))
        .await
    }

    async fn create_proxy_repository(
        &self,
        format: RepositoryFormat,
        config: &ProxyRepositoryConfig,
    ) -> Result<()> {
        self.execute(RepositoryRequest::new(
            format,
            RepositorySpec::Proxy(config.clone()),
        ))
        .await
    }

    async fn create_group_repository(
        &self,
        format: RepositoryFormat,
        config: &GroupRepositoryConfig,
    ) -> Result<()> {
        self.execute(RepositoryRequest::new(
            format,
            RepositorySpec::Group(config.clone()),
        ))
        .await
    }
}
