use crate::shared::Result;
use async_trait::async_trait;

/// IqClient port for authenticated calls to the policy server REST API
///
/// Paths are relative to the server's base URL (e.g.
/// `api/v2/components/remediation/application/{id}?stageId=build`).
/// Authentication, timeouts and TLS are the implementation's concern.
#[async_trait]
pub trait IqClient: Send + Sync {
    /// Sends a GET request and returns the response body
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-success status code
    async fn get(&self, path: &str) -> Result<Vec<u8>>;

    /// Sends a POST request with a JSON body and returns the response body
    ///
    /// # Errors
    /// Returns an error if the request fails or the server answers with a
    /// non-success status code
    async fn post(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}
