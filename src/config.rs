//! Configuration file support for nexus-admin.
//!
//! Provides YAML-based configuration through `nexus-admin.config.yml` files:
//! connection details for the policy server (`iq`) and the repository
//! manager (`rm`), file loading, environment overrides and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::adapters::outbound::network::ConnectionSettings;
use crate::shared::{AdminError, Result};

pub const CONFIG_FILENAME: &str = "nexus-admin.config.yml";

/// Environment variable that overrides the policy server password
pub const IQ_PASSWORD_ENV: &str = "NEXUS_IQ_PASSWORD";
/// Environment variable that overrides the repository manager password
pub const RM_PASSWORD_ENV: &str = "NEXUS_RM_PASSWORD";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub iq: Option<ServerConfig>,
    pub rm: Option<ServerConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Connection details of one server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub url: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_username() -> String {
    "admin".to_string()
}

impl ServerConfig {
    /// Builds adapter settings, preferring the password from `password_env`
    pub fn connection_settings(&self, password_env: &str) -> ConnectionSettings {
        let password = std::env::var(password_env)
            .ok()
            .or_else(|| self.password.clone())
            .unwrap_or_default();

        let settings = ConnectionSettings::new(&self.url, &self.username, password);
        match self.timeout_secs {
            Some(secs) => settings.with_timeout(Duration::from_secs(secs)),
            None => settings,
        }
    }
}

impl ConfigFile {
    /// Connection settings for the policy server.
    pub fn iq_settings(&self) -> Result<ConnectionSettings> {
        Self::require(self.iq.as_ref(), "iq", IQ_PASSWORD_ENV)
    }

    /// Connection settings for the repository manager.
    pub fn rm_settings(&self) -> Result<ConnectionSettings> {
        Self::require(self.rm.as_ref(), "rm", RM_PASSWORD_ENV)
    }

    fn require(
        server: Option<&ServerConfig>,
        section: &str,
        password_env: &str,
    ) -> Result<ConnectionSettings> {
        let server = server.ok_or_else(|| AdminError::Validation {
            message: format!(
                "missing '{}' section in config.\n\n💡 Hint: Add a '{}:' section with at least a 'url' field.",
                section, section
            ),
        })?;
        Ok(server.connection_settings(password_env))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (section, server) in [("iq", &config.iq), ("rm", &config.rm)] {
        let Some(server) = server else {
            continue;
        };

        if server.url.trim().is_empty() {
            bail!(
                "Invalid config: {}.url must not be empty.\n\n\
                 💡 Hint: Use the server's base URL (e.g., \"http://localhost:8070\").",
                section
            );
        }

        if !server.url.starts_with("http://") && !server.url.starts_with("https://") {
            bail!(
                "Invalid config: {}.url must start with http:// or https://",
                section
            );
        }

        if server.timeout_secs == Some(0) {
            bail!("Invalid config: {}.timeout_secs must be greater than 0", section);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}
