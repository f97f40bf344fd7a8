pub mod component;
pub mod remediation;
pub mod repository;
pub mod scope;

pub use component::{Component, ComponentIdentifier};
pub use remediation::{Remediation, RemediationData, RemediationType, RemediationVersionChange};
pub(crate) use remediation::RemediationResponse;
pub use repository::{
    GroupRepositoryConfig, HostedRepositoryConfig, ProxyRepositoryConfig, RepositoryFormat,
    RepositoryKind,
};
pub use scope::{ApplicationSummary, InternalId, OrganizationSummary, PolicyScope};
