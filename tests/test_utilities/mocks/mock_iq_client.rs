use async_trait::async_trait;
use nexus_admin::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock IqClient that answers every POST with a canned body
#[derive(Clone)]
pub struct MockIqClient {
    pub response: String,
    pub should_fail: bool,
    pub posts: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
}

impl MockIqClient {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            posts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new("")
        }
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    pub fn last_path(&self) -> Option<String> {
        self.posts.lock().unwrap().last().map(|(path, _)| path.clone())
    }
}

#[async_trait]
impl IqClient for MockIqClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        anyhow::bail!("Mock IQ client does not serve GET {}", path)
    }

    async fn post(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        self.posts.lock().unwrap().push((path.to_string(), body));
        if self.should_fail {
            anyhow::bail!("Mock IQ client failure");
        }
        Ok(self.response.as_bytes().to_vec())
    }
}
