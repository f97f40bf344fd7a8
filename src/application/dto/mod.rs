/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod remediation_request;
mod repository_request;

pub use remediation_request::RemediationRequest;
pub use repository_request::{RepositoryRequest, RepositorySpec};
