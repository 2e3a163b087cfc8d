//! Core portfolio client implementation.

use crate::base_url::{ClientConfig, ResolvedBaseUrl};
use crate::error::{ClientError, Result};
use crate::types::{Experience, Profile, Project, Skill, StatusResponse};
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// A client for the read-only portfolio API.
///
/// # Example
///
/// ```no_run
/// use portfolio_client::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://localhost:8080")?;
///
/// let profile = client.get_profile().await?;
/// println!("{} - {}", profile.full_name, profile.title);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Base URL, without trailing slash.
    base_url: ResolvedBaseUrl,
    http: HttpClient,
}

impl Client {
    /// Create a client for an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not `http(s)://` or the HTTP client
    /// cannot be created.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        Self::from_config(&ClientConfig::default().with_base_url(base_url))
    }

    /// Create a client from resolution inputs.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved URL is not `http(s)://` or the HTTP
    /// client cannot be created.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = config.resolve();

        let lower = base_url.url.to_ascii_lowercase();
        if !lower.starts_with("http://") && !lower.starts_with("https://") {
            return Err(ClientError::InvalidUrl(format!(
                "URL must start with http:// or https://, got: {}",
                base_url.url
            )));
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Create a client configured from `PORTFOLIO_API_BASE_URL`.
    ///
    /// # Errors
    ///
    /// See [`Client::from_config`].
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    /// Set a custom timeout for all requests.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http = HttpClient::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// The base URL requests are sent to, and how it was chosen.
    pub fn base_url(&self) -> &ResolvedBaseUrl {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        let path = path.strip_prefix('/').unwrap_or(path);
        format!("{}/api/{}", self.base_url.url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        Self::handle_response(response).await
    }

    /// Deserialize a 2xx body, or map anything else to [`ClientError::Api`].
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        let text = String::from_utf8_lossy(&body).into_owned();
        let message = match serde_json::from_slice::<serde_json::Value>(&body) {
            Ok(json) => json["error"]["message"]
                .as_str()
                .or_else(|| json["error"].as_str())
                .or_else(|| json["message"].as_str())
                .map(str::to_string)
                .unwrap_or(text),
            Err(_) if text.is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => text,
        };

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Fetch the profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a profile.
    pub async fn get_profile(&self) -> Result<Profile> {
        self.get("profile").await
    }

    /// Fetch all projects in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a project list.
    pub async fn get_projects(&self) -> Result<Vec<Project>> {
        self.get("projects").await
    }

    /// Fetch work experience in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not an experience list.
    pub async fn get_experience(&self) -> Result<Vec<Experience>> {
        self.get("experience").await
    }

    /// Fetch skills in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a skill list.
    pub async fn get_skills(&self) -> Result<Vec<Skill>> {
        self.get("skills").await
    }

    /// Check that the API is up.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_status(&self) -> Result<StatusResponse> {
        self.get("status").await
    }
}
