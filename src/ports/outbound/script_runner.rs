use crate::shared::Result;
use async_trait::async_trait;

/// ScriptRunner port for one-shot administrative scripts
///
/// The repository manager executes the script body once and discards it.
/// Running a script has side effects on the server and is not idempotent.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Runs a Groovy script once and returns its result
    ///
    /// # Arguments
    /// * `script` - Script body
    /// * `params` - Optional argument string passed to the script
    ///
    /// # Errors
    /// Returns an error if the script cannot be uploaded, fails to run, or
    /// the server rejects it
    async fn run_script_once(&self, script: &str, params: Option<&str>) -> Result<Vec<u8>>;
}
