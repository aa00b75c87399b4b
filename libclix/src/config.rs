//! Credential configuration for clix
//!
//! The configuration is a flat JSON record of the four OAuth 1.0a values
//! stored at `~/.config/clix.json`. [`ConfigStore::load_or_create`] fills in
//! whatever is missing interactively and writes the result back.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{ConfigError, Result};
use crate::prompt::Prompt;

/// File name of the configuration inside `~/.config`
pub const CONFIG_FILE_NAME: &str = "clix.json";

#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    #[serde(default)]
    pub access_token: String,
    #[serde(default)]
    pub access_secret: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    ConsumerKey,
    ConsumerSecret,
    AccessToken,
    AccessSecret,
}

impl CredentialField {
    /// All fields in prompting order
    pub const ALL: [CredentialField; 4] = [
        CredentialField::ConsumerKey,
        CredentialField::ConsumerSecret,
        CredentialField::AccessToken,
        CredentialField::AccessSecret,
    ];

    /// Prompt shown when the field has to be entered
    pub fn label(self) -> &'static str {
        match self {
            CredentialField::ConsumerKey => "Enter Consumer Key: ",
            CredentialField::ConsumerSecret => "Enter Consumer Secret: ",
            CredentialField::AccessToken => "Enter Access Token: ",
            CredentialField::AccessSecret => "Enter Access Secret: ",
        }
    }

    /// Key of the field in the JSON file
    pub fn key(self) -> &'static str {
        match self {
            CredentialField::ConsumerKey => "consumer_key",
            CredentialField::ConsumerSecret => "consumer_secret",
            CredentialField::AccessToken => "access_token",
            CredentialField::AccessSecret => "access_secret",
        }
    }
}

impl Credentials {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        access_token: impl Into<String>,
        access_secret: impl Into<String>,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        }
    }

    pub fn get(&self, field: CredentialField) -> &str {
        match field {
            CredentialField::ConsumerKey => &self.consumer_key,
            CredentialField::ConsumerSecret => &self.consumer_secret,
            CredentialField::AccessToken => &self.access_token,
            CredentialField::AccessSecret => &self.access_secret,
        }
    }

    pub fn set(&mut self, field: CredentialField, value: String) {
        let slot = match field {
            CredentialField::ConsumerKey => &mut self.consumer_key,
            CredentialField::ConsumerSecret => &mut self.consumer_secret,
            CredentialField::AccessToken => &mut self.access_token,
            CredentialField::AccessSecret => &mut self.access_secret,
        };
        slot.zeroize();
        *slot = value;
    }

    /// Fields that are still empty, in prompting order
    pub fn missing_fields(&self) -> Vec<CredentialField> {
        CredentialField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// A record is usable only when all four values are present
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &str) -> &'static str {
            if value.is_empty() {
                "<empty>"
            } else {
                "<redacted>"
            }
        }

        f.debug_struct("Credentials")
            .field("consumer_key", &redact(&self.consumer_key))
            .field("consumer_secret", &redact(&self.consumer_secret))
            .field("access_token", &redact(&self.access_token))
            .field("access_secret", &redact(&self.access_secret))
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.consumer_key.zeroize();
        self.consumer_secret.zeroize();
        self.access_token.zeroize();
        self.access_secret.zeroize();
    }
}

/// Reads and writes the credential file at a fixed location
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the resolved default location
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(resolve_config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the credentials, prompting for and persisting anything missing
    ///
    /// A file that exists but does not parse is an error; the user is never
    /// re-prompted over a malformed file.
    pub fn load_or_create<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<Credentials> {
        self.ensure_parent_dir()?;

        let mut credentials = match self.load()? {
            None => {
                tracing::info!("No configuration at {:?}", self.path);
                prompt.say("Configuration file not found. Creating a new one...")?;
                Credentials::default()
            }
            Some(credentials) if credentials.is_complete() => {
                tracing::debug!("Loaded complete configuration from {:?}", self.path);
                return Ok(credentials);
            }
            Some(credentials) => {
                tracing::info!(
                    "Configuration at {:?} is missing {:?}",
                    self.path,
                    credentials
                        .missing_fields()
                        .iter()
                        .map(|f| f.key())
                        .collect::<Vec<_>>()
                );
                prompt.say("Configuration file is incomplete. Prompting for missing values...")?;
                credentials
            }
        };

        prompt.fill_missing(&mut credentials);
        self.persist(&credentials)?;

        Ok(credentials)
    }

    /// Read the file if it exists
    pub fn load(&self) -> Result<Option<Credentials>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(ConfigError::Read)?;
        let credentials: Credentials =
            serde_json::from_str(&content).map_err(ConfigError::Parse)?;

        Ok(Some(credentials))
    }

    /// Overwrite the file with `credentials` as two-space indented JSON
    pub fn persist(&self, credentials: &Credentials) -> Result<()> {
        let mut content = serde_json::to_string_pretty(credentials)
            .map_err(|e| ConfigError::Write(e.into()))?;
        content.push('\n');

        std::fs::write(&self.path, &content).map_err(ConfigError::Write)?;
        content.zeroize();

        // Set file permissions to 600 on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&self.path, perms).map_err(ConfigError::Write)?;
        }

        tracing::debug!("Wrote configuration to {:?}", self.path);
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        Ok(())
    }
}

/// Resolve the default configuration file path, `<home>/.config/clix.json`
pub fn resolve_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirectoryUnavailable)?;

    Ok(home.join(".config").join(CONFIG_FILE_NAME))
}

/// Expand a leading `~` in a user-supplied path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).to_string())
}
