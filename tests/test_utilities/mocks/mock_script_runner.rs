use async_trait::async_trait;
use nexus_admin::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ScriptRunner that records every submitted script
#[derive(Default, Clone)]
pub struct MockScriptRunner {
    pub scripts: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockScriptRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_scripts(&self) -> Vec<String> {
        self.scripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunner for MockScriptRunner {
    async fn run_script_once(&self, script: &str, _params: Option<&str>) -> Result<Vec<u8>> {
        self.scripts.lock().unwrap().push(script.to_string());
        if self.should_fail {
            anyhow::bail!("Mock script runner failure");
        }
        Ok(Vec::new())
    }
}
