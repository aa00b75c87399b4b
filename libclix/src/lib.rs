//! clix - post to Twitter/X from the terminal
//!
//! This library holds the pieces of the `clix` tool: the credential store,
//! interactive prompting, the OAuth 1.0a Twitter client and the posting loop.

pub mod config;
pub mod error;
pub mod logging;
pub mod platforms;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigStore, Credentials};
pub use error::{ClixError, Result};
pub use platforms::Platform;
pub use prompt::Prompt;
pub use session::{Session, SessionSummary};
