use crate::admin::domain::{
    GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig, RepositoryFormat,
};
use crate::shared::Result;
use async_trait::async_trait;

/// ProvisioningPort - Inbound port for creating repositories
///
/// Each call renders one creation statement and runs it once on the
/// repository manager. Calls are not idempotent: repeating one after a
/// success fails on the server with a duplicate name.
#[async_trait]
pub trait ProvisioningPort {
    async fn create_hosted_repository(
        &self,
        format: RepositoryFormat,
        config: &HostedRepositoryConfig,
    ) -> Result<()>;

    async fn create_proxy_repository(
        &self,
        format: RepositoryFormat,
        config: &ProxyRepositoryConfig,
    ) -> Result<()>;

    async fn create_group_repository(
        &self,
        format: RepositoryFormat,
        config: &GroupRepositoryConfig,
    ) -> Result<()>;
}
