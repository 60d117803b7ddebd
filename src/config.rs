//! Backend address and HTTP client construction.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Url};

/// Base URL baked in at build time (`PLANTREC_API_BASE_URL`).
pub const DEFAULT_API_BASE_URL: &str = env!("PLANTREC_API_BASE_URL");

/// Connection settings for the plant recommendation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Validates `base_url` and strips any trailing `/` so paths can be appended.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed =
            Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {}", base_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!(
                "Invalid API base URL: {}. Expected an http or https URL.",
                base_url
            );
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// Uses the override when given, otherwise the build-time default.
    pub fn resolve(api_url: Option<&str>) -> Result<Self> {
        let base_url = api_url.unwrap_or(DEFAULT_API_BASE_URL);
        debug!("Using API base URL {}", base_url);
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a path such as `/plants/all` onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds the reqwest client used for every request.
    pub fn build_client(&self) -> Result<Client> {
        Client::builder()
            .user_agent(concat!("plantrec/", env!("PLANTREC_VERSION")))
            .build()
            .context("Failed to build HTTP client")
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.trim_end_matches('/').to_string(),
        }
    }
}
