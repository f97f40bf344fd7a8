use crate::shared::Result;
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

/// Maximum number of characters of a server error body kept in messages
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Connection settings for one administration server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    /// Base URL, e.g. `http://localhost:8070`
    pub url: String,
    pub username: String,
    pub password: String,
    pub timeout: Duration,
}

impl ConnectionSettings {
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            username: username.into(),
            password: password.into(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECONDS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Authenticated HTTP connection shared by the server adapters
#[derive(Debug, Clone)]
pub(crate) struct ServerConnection {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ServerConnection {
    pub(crate) fn new(settings: &ConnectionSettings) -> Result<Self> {
        if settings.url.trim().is_empty() {
            anyhow::bail!("Server URL must not be empty");
        }

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nexus-admin/{}", version);
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.url.trim_end_matches('/').to_string(),
            username: settings.username.clone(),
            password: settings.password.clone(),
        })
    }

    /// Joins a relative API path onto the base URL with exactly one slash
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .basic_auth(&self.username, Some(&self.password))
    }

    /// Sends a request and returns the body of a successful response
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
            if detail.is_empty() {
                anyhow::bail!("Server returned status code {}", status);
            }
            anyhow::bail!("Server returned status code {}: {}", status, detail);
        }

        Ok(response.bytes().await?.to_vec())
    }
}
