use super::connection::{ConnectionSettings, ServerConnection};
use crate::ports::outbound::ScriptRunner;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

const SCRIPT_API: &str = "service/rest/v1/script";

#[derive(Debug, Serialize)]
struct ScriptUpload<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    script_type: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScriptRunResult {
    #[serde(default)]
    result: Option<String>,
}

/// RmHttpClient adapter for the repository manager script API
///
/// A one-shot run uploads the script under a throwaway name, runs it, and
/// deletes it again whether or not the run succeeded.
#[derive(Debug, Clone)]
pub struct RmHttpClient {
    connection: ServerConnection,
}

impl RmHttpClient {
    /// Creates a client for the repository manager described by `settings`
    pub fn new(settings: &ConnectionSettings) -> Result<Self> {
        Ok(Self {
            connection: ServerConnection::new(settings)?,
        })
    }

    fn anonymous_script_name() -> String {
        format!("anon-script-{}", Uuid::new_v4())
    }

    async fn upload(&self, name: &str, content: &str) -> Result<()> {
        let upload = ScriptUpload {
            name,
            script_type: "groovy",
            content,
        };
        let request = self
            .connection
            .request(Method::POST, SCRIPT_API)
            .json(&upload);
        self.connection
            .send(request)
            .await
            .context("Failed to upload script")?;
        Ok(())
    }

    async fn run(&self, name: &str, params: Option<&str>) -> Result<Vec<u8>> {
        let request = self
            .connection
            .request(Method::POST, &format!("{}/{}/run", SCRIPT_API, name))
            .header(CONTENT_TYPE, "text/plain")
            .body(params.unwrap_or_default().to_string());
        let body = self
            .connection
            .send(request)
            .await
            .context("Failed to run script")?;

        let outcome: ScriptRunResult =
            serde_json::from_slice(&body).context("Failed to parse script result")?;
        Ok(outcome.result.unwrap_or_default().into_bytes())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let request = self
            .connection
            .request(Method::DELETE, &format!("{}/{}", SCRIPT_API, name));
        self.connection.send(request).await?;
        Ok(())
    }
}

#[async_trait]
impl ScriptRunner for RmHttpClient {
    async fn run_script_once(&self, script: &str, params: Option<&str>) -> Result<Vec<u8>> {
        let name = Self::anonymous_script_name();
        debug!(script = %name, "Uploading one-shot script");

        self.upload(&name, script).await?;
        let outcome = self.run(&name, params).await;

        if let Err(e) = self.delete(&name).await {
            warn!(script = %name, error = %e, "Failed to delete one-shot script");
        }

        outcome
    }
}
