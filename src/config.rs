//! API base configuration
//!
//! The API base URL is the only piece of configuration the forms need. It is
//! persisted under the `api_base` storage key and handed to every network
//! call as an explicit [`ApiConfig`] value.

use crate::storage::KeyValueStore;
use crate::{Error, Result};
use reqwest::Url;

/// Storage key holding the API base URL
pub const API_BASE_KEY: &str = "api_base";

/// API base used when nothing has been stored
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /api/contact`
    Contact,
    /// `POST /api/apply-job`
    ApplyJob,
}

impl Endpoint {
    /// Path segment under `/api/`
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Contact => "contact",
            Endpoint::ApplyJob => "apply-job",
        }
    }
}

/// Backend location for form submissions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
}

impl ApiConfig {
    /// Create a config for an explicit base URL (not persisted)
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    /// Load the API base from storage, falling back to [`DEFAULT_API_BASE`]
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self> {
        let api_base = store
            .get_item(API_BASE_KEY)?
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Ok(Self { api_base })
    }

    /// The configured base URL
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Change the base URL and persist it
    ///
    /// Empty input leaves the config untouched and returns `Ok(false)`.
    /// Anything that is not an absolute http(s) URL is rejected.
    pub fn set_api_base<S: KeyValueStore + ?Sized>(&mut self, store: &S, url: &str) -> Result<bool> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(false);
        }

        let parsed = Url::parse(url)
            .map_err(|e| Error::Config(format!("Invalid API base URL '{}': {}", url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "API base URL must use http or https: {}",
                url
            )));
        }

        store.set_item(API_BASE_KEY, url)?;
        self.api_base = url.to_string();
        tracing::info!("API base set to {}", url);
        Ok(true)
    }

    /// Full URL of an endpoint, `<API_BASE>/api/<endpoint>`
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/api/{}", self.api_base.trim_end_matches('/'), endpoint.path())
    }

    /// Label for the API settings button
    pub fn display_label(&self) -> String {
        format!("API: {}", self.api_base)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
