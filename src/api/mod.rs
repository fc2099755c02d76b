//! REST Countries API client

use reqwest::Client;
use thiserror::Error;

use crate::models::Country;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Errors from the REST Countries API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (DNS, TLS, timeout, decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success HTTP status
    #[error("server returned {status}")]
    Status {
        /// The status code the server answered with
        status: reqwest::StatusCode,
    },
    /// The per-name lookup returned an empty array
    #[error("country not found: {0}")]
    NotFound(String),
}

/// Client for the REST Countries API.
pub struct RestCountriesClient {
    client: Client,
    base_url: String,
}

impl RestCountriesClient {
    /// Create a client against a base URL (`https://restcountries.com/v3.1`
    /// in production, a mock server in tests).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Create a client against the production API.
    pub fn default_client() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Fetch the full country collection, sorted ascending by common name
    /// (case-insensitive). Fetched once per session; retry is manual.
    pub async fn all(&self) -> Result<Vec<Country>, ApiError> {
        let url = format!("{}/all", self.base_url);
        tracing::debug!("Fetching countries from {url}");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        let mut countries: Vec<Country> = response.json().await?;

        // Base sort the rest of the app relies on: sections inherit this
        // order, so it happens here and nowhere else.
        countries.sort_by(|a, b| {
            a.name
                .common
                .to_lowercase()
                .cmp(&b.name.common.to_lowercase())
        });

        Ok(countries)
    }

    /// Fetch a single country by its exact common name.
    ///
    /// The API answers the per-name lookup with a single-element array.
    pub async fn by_name(&self, name: &str) -> Result<Country, ApiError> {
        let url = format!(
            "{}/name/{}?fullText=true",
            self.base_url,
            urlencoding::encode(name)
        );
        tracing::debug!("Fetching country details from {url}");

        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(ApiError::Status {
                status: response.status(),
            });
        }

        let mut matches: Vec<Country> = response.json().await?;
        if matches.is_empty() {
            return Err(ApiError::NotFound(name.to_string()));
        }
        Ok(matches.remove(0))
    }
}
