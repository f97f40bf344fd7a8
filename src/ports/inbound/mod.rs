/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that external adapters (e.g., CLI)
/// use to interact with the application core.
pub mod provisioning_port;
pub mod remediation_port;

pub use provisioning_port::ProvisioningPort;
pub use remediation_port::RemediationPort;
