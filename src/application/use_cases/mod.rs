/// Use cases module containing application business logic orchestration
mod create_repository;
mod get_remediation;

pub use create_repository::CreateRepositoryUseCase;
pub use get_remediation::{remediation_endpoint, GetRemediationUseCase};
