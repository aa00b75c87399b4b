//! Platform abstraction and implementations
//!
//! The posting loop talks to the remote service only through the [`Platform`]
//! trait. [`twitter::TwitterClient`] is the real implementation;
//! [`mock::MockPlatform`] stands in for it in tests.
//!
//! # Examples
//!
//! ```no_run
//! use libclix::config::Credentials;
//! use libclix::platforms::{Platform, twitter::TwitterClient};
//!
//! # async fn example() -> libclix::error::Result<()> {
//! let credentials = Credentials::new("key", "secret", "token", "token-secret");
//! let client = TwitterClient::new(&credentials)?;
//!
//! let id = client.post("Hello from the terminal").await?;
//! println!("Posted: {}", id);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;

pub mod oauth;
pub mod twitter;

// Mock platform is available for all builds (not just tests) to support integration tests
pub mod mock;

/// A service that text posts can be published to
#[async_trait]
pub trait Platform: Send + Sync {
    /// Publish `content` as a new post
    ///
    /// Performs exactly one request. Returns the identifier the service
    /// assigned to the post.
    ///
    /// # Errors
    ///
    /// Returns a `PlatformError` describing why the service refused or could
    /// not be reached (`Authentication`, `RateLimit`, `Network`, `Posting`).
    async fn post(&self, content: &str) -> Result<String>;

    /// Lowercase identifier for the platform (e.g. "twitter")
    fn name(&self) -> &str;
}
