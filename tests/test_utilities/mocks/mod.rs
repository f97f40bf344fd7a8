/// Mock implementations for testing
mod mock_iq_client;
mod mock_scope_resolver;
mod mock_script_runner;

pub use mock_iq_client::MockIqClient;
pub use mock_scope_resolver::MockScopeResolver;
pub use mock_script_runner::MockScriptRunner;
