//! nexus-admin - administration client for a repository manager and a policy server
//!
//! This library creates repositories on a repository manager by rendering
//! format-specific Groovy statements and running them as one-shot scripts,
//! and looks up component remediations on a policy server. It follows a
//! hexagonal architecture.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`admin`): Data shapes and statement rendering
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): HTTP implementations of the ports
//! - **Shared** (`shared`): Error taxonomy and result alias
//!
//! # Example
//!
//! ```no_run
//! use nexus_admin::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let settings = ConnectionSettings::new("http://localhost:8081", "admin", "admin123");
//! let use_case = CreateRepositoryUseCase::new(RmHttpClient::new(&settings)?);
//!
//! let config = GroupRepositoryConfig::new("maven-public")
//!     .with_members(["maven-releases", "maven-central"]);
//! use_case
//!     .create_group_repository(RepositoryFormat::Maven, &config)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod admin;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::{ConnectionSettings, IqHttpClient, RmHttpClient};
    pub use crate::admin::domain::{
        ApplicationSummary, Component, ComponentIdentifier, GroupRepositoryConfig,
        HostedRepositoryConfig, InternalId, OrganizationSummary, PolicyScope,
        ProxyRepositoryConfig, Remediation, RemediationType, RemediationVersionChange,
        RepositoryFormat, RepositoryKind,
    };
    pub use crate::admin::services::ScriptBuilder;
    pub use crate::application::dto::{RemediationRequest, RepositoryRequest, RepositorySpec};
    pub use crate::application::use_cases::{CreateRepositoryUseCase, GetRemediationUseCase};
    pub use crate::ports::inbound::{ProvisioningPort, RemediationPort};
    pub use crate::ports::outbound::{IqClient, ScopeResolver, ScriptRunner};
    pub use crate::shared::{AdminError, Result};
}
