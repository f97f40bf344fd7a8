/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the policy server and the repository manager.
pub mod iq_client;
pub mod scope_resolver;
pub mod script_runner;

pub use iq_client::IqClient;
pub use scope_resolver::ScopeResolver;
pub use script_runner::ScriptRunner;
