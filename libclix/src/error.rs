//! Error types for clix

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClixError>;

#[derive(Error, Debug)]
pub enum ClixError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClixError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ClixError::Platform(PlatformError::Authentication(_)) => 2,
            ClixError::Platform(PlatformError::ClientConstruction(_)) => 2,
            ClixError::Platform(_) => 1,
            ClixError::Config(_) => 1,
            ClixError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unable to determine home directory")]
    HomeDirectoryUnavailable,

    #[error("Failed to create config directory {path:?}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("Failed to create client: {0}")]
    ClientConstruction(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_authentication_error() {
        let error = ClixError::Platform(PlatformError::Authentication("Bad token".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_client_construction_error() {
        let error =
            ClixError::Platform(PlatformError::ClientConstruction("empty key".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_posting_error() {
        let error = ClixError::Platform(PlatformError::Posting("Duplicate content".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = ClixError::Config(ConfigError::HomeDirectoryUnavailable);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_rate_limit() {
        let error = ClixError::Platform(PlatformError::RateLimit("Too Many Requests".to_string()));
        assert_eq!(
            error.to_string(),
            "Platform error: Rate limit exceeded: Too Many Requests"
        );
    }

    #[test]
    fn test_error_message_formatting_parse() {
        let json_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ClixError = ConfigError::Parse(json_error).into();
        let message = error.to_string();
        assert!(message.starts_with("Configuration error: Failed to parse config file:"));
    }

    #[test]
    fn test_error_message_formatting_directory_create() {
        let error = ConfigError::DirectoryCreate {
            path: PathBuf::from("/nope/.config"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "Failed to create config directory \"/nope/.config\": denied"
        );
    }

    #[test]
    fn test_error_conversion_from_platform_error() {
        let error: ClixError = PlatformError::Network("connection reset".to_string()).into();

        match error {
            ClixError::Platform(PlatformError::Network(msg)) => {
                assert_eq!(msg, "connection reset");
            }
            _ => panic!("Expected ClixError::Platform"),
        }
    }
}
