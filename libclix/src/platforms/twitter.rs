//! Twitter/X platform implementation
//!
//! Posts through the v2 `POST /2/tweets` endpoint using OAuth 1.0a user
//! context. Credentials are handed to the client directly; nothing is read
//! from the process environment.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::{PlatformError, Result};
use crate::platforms::oauth::OAuth1Keys;
use crate::platforms::Platform;

pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";
const CREATE_TWEET_PATH: &str = "/2/tweets";

#[derive(Serialize)]
struct CreateTweetRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct CreateTweetResponse {
    data: CreatedTweet,
}

#[derive(Deserialize)]
struct CreatedTweet {
    id: String,
}

/// Problem document returned by the v2 API on failure
#[derive(Deserialize, Default)]
struct ApiProblem {
    title: Option<String>,
    detail: Option<String>,
    #[serde(default)]
    errors: Vec<ApiErrorItem>,
}

#[derive(Deserialize)]
struct ApiErrorItem {
    message: Option<String>,
}

impl ApiProblem {
    fn message(&self) -> Option<String> {
        if let Some(detail) = &self.detail {
            return Some(detail.clone());
        }

        let messages: Vec<&str> = self
            .errors
            .iter()
            .filter_map(|e| e.message.as_deref())
            .collect();
        if !messages.is_empty() {
            return Some(messages.join("; "));
        }

        self.title.clone()
    }
}

/// Map an unsuccessful API response to PlatformError
fn map_twitter_error(status: StatusCode, body: &str) -> PlatformError {
    let problem: ApiProblem = serde_json::from_str(body).unwrap_or_default();
    let message = problem.message().unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    });

    match status {
        StatusCode::UNAUTHORIZED => PlatformError::Authentication(format!(
            "{} ({}). Check the credentials in your clix configuration.",
            message, status
        )),
        StatusCode::TOO_MANY_REQUESTS => PlatformError::RateLimit(format!(
            "{} ({}). Please wait before trying again.",
            message, status
        )),
        _ => PlatformError::Posting(format!("{} ({})", message, status)),
    }
}

pub struct TwitterClient {
    http: reqwest::Client,
    keys: OAuth1Keys,
    base_url: String,
}

impl TwitterClient {
    /// Create a client authenticated with OAuth 1.0a user context
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ClientConstruction` if any credential is empty
    /// or the HTTP client cannot be initialised.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let missing = credentials.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.key()).collect();
            return Err(PlatformError::ClientConstruction(format!(
                "missing credentials: {}",
                names.join(", ")
            ))
            .into());
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("clix/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlatformError::ClientConstruction(e.to_string()))?;

        Ok(Self {
            http,
            keys: OAuth1Keys {
                consumer_key: credentials.consumer_key.clone(),
                consumer_secret: credentials.consumer_secret.clone(),
                token: credentials.access_token.clone(),
                token_secret: credentials.access_secret.clone(),
            },
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Send requests to a different API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn create_tweet_url(&self) -> String {
        format!("{}{}", self.base_url, CREATE_TWEET_PATH)
    }
}

#[async_trait]
impl Platform for TwitterClient {
    async fn post(&self, content: &str) -> Result<String> {
        let url = self.create_tweet_url();
        let authorization = self.keys.authorization_header("POST", &url, &[])?;

        tracing::debug!("Posting to Twitter: {} characters", content.chars().count());

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .json(&CreateTweetRequest { text: content })
            .send()
            .await
            .map_err(|e| PlatformError::Network(format!("Failed to reach Twitter: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PlatformError::Network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            tracing::debug!("Twitter returned {}: {}", status, body);
            return Err(map_twitter_error(status, &body).into());
        }

        let created: CreateTweetResponse = serde_json::from_str(&body).map_err(|e| {
            PlatformError::Posting(format!("Unexpected response from Twitter: {}", e))
        })?;

        tracing::debug!("Posted to Twitter: {}", created.data.id);
        Ok(created.data.id)
    }

    fn name(&self) -> &str {
        "twitter"
    }
}
