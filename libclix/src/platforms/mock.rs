//! Mock platform implementation for testing
//!
//! Records every post it receives and either succeeds with a sequential ID
//! or fails with a configured error, so the posting loop can be exercised
//! without credentials or network access.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::{PlatformError, Result};
use crate::platforms::Platform;

/// Configuration for mock platform behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Platform name
    pub name: String,

    /// Error to return from every post; `None` means posts succeed
    pub post_error: Option<PlatformError>,

    /// Posts that have been attempted, in order
    pub posted_content: Arc<Mutex<Vec<String>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            post_error: None,
            posted_content: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock platform for testing
pub struct MockPlatform {
    config: MockConfig,
}

impl MockPlatform {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock platform that always succeeds
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// Create a mock platform whose posts always fail with `error`
    pub fn post_failure(error: PlatformError) -> Self {
        Self::new(MockConfig {
            post_error: Some(error),
            ..Default::default()
        })
    }

    /// Content of every post attempted so far
    pub fn posted(&self) -> Vec<String> {
        self.config
            .posted_content
            .lock()
            .map(|posts| posts.clone())
            .unwrap_or_default()
    }

    /// Number of post attempts so far
    pub fn post_count(&self) -> usize {
        self.posted().len()
    }
}

#[async_trait]
impl Platform for MockPlatform {
    async fn post(&self, content: &str) -> Result<String> {
        let count = {
            let mut posts = self
                .config
                .posted_content
                .lock()
                .map_err(|e| PlatformError::Posting(format!("mock state poisoned: {}", e)))?;
            posts.push(content.to_string());
            posts.len()
        };

        if let Some(error) = &self.config.post_error {
            return Err(error.clone().into());
        }

        Ok(format!("{}-{}", self.config.name, count))
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}
