use crate::admin::domain::{
    GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig, RepositoryFormat,
    RepositoryKind,
};
use crate::admin::services::ScriptBuilder;
use crate::shared::Result;

/// Kind-specific configuration of a repository to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositorySpec {
    Hosted(HostedRepositoryConfig),
    Proxy(ProxyRepositoryConfig),
    Group(GroupRepositoryConfig),
}

impl RepositorySpec {
    pub fn kind(&self) -> RepositoryKind {
        match self {
            RepositorySpec::Hosted(_) => RepositoryKind::Hosted,
            RepositorySpec::Proxy(_) => RepositoryKind::Proxy,
            RepositorySpec::Group(_) => RepositoryKind::Group,
        }
    }
}

/// RepositoryRequest - Internal request DTO for the provisioning use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRequest {
    pub format: RepositoryFormat,
    pub spec: RepositorySpec,
}

impl RepositoryRequest {
    pub fn new(format: RepositoryFormat, spec: RepositorySpec) -> Self {
        Self { format, spec }
    }

    /// Renders the creation statement this request would run
    pub fn render(&self) -> Result<String> {
        match &self.spec {
            RepositorySpec::Hosted(config) => ScriptBuilder::render_hosted(self.format, config),
            RepositorySpec::Proxy(config) => ScriptBuilder::render_proxy(self.format, config),
            RepositorySpec::Group(config) => ScriptBuilder::render_group(self.format, config),
        }
    }
}
