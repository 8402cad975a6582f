//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer token sent with every request
//! - Status-code to error mapping (single attempt, no retries)

use crate::error::ForgeError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
pub const DEFAULT_USER_AGENT: &str = concat!("appfeed/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API media type
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub REST API version header
const GITHUB_API_VERSION: &str = "2022-11-28";

/// HTTP client wrapper carrying credentials and defaults
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    authenticated: bool,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new(token: Option<String>) -> Result<Self, ForgeError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, token)
    }

    /// Create a new HTTP client with custom configuration
    ///
    /// Without a token, requests are sent anonymously and fall under the
    /// public rate limit.
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<String>,
    ) -> Result<Self, ForgeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let token = token.filter(|t| !t.trim().is_empty());
        let authenticated = token.is_some();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim())).map_err(
                |e| ForgeError::ClientError {
                    message: format!("invalid token: {}", e),
                },
            )?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| ForgeError::ClientError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            authenticated,
        })
    }

    /// Whether requests carry a token
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Perform a GET request, mapping failures to errors about `repo`
    pub async fn get(&self, url: &str, repo: &str) -> Result<reqwest::Response, ForgeError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ForgeError::Timeout {
                    repo: repo.to_string(),
                }
            } else {
                ForgeError::network_error(repo, e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ForgeError::RepositoryNotFound {
                repo: repo.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ForgeError::HttpStatus {
                repo: repo.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Perform a GET request and parse the JSON body
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repo: &str,
    ) -> Result<T, ForgeError> {
        let response = self.get(url, repo).await?;

        response
            .json::<T>()
            .await
            .map_err(|e| ForgeError::invalid_response(repo, format!("failed to parse JSON: {}", e)))
    }
}
