//! HTTP-backed breed source.
//!
//! Talks to the dog.ceo breed listing API through a blocking reqwest client
//! that is created once and reused for every lookup.

use crate::config::DogApiConfig;
use crate::error::{BreedNotFoundError, Result};
use crate::network::response::parse_sub_breeds;
use crate::source::{normalize_breed, BreedSource, SubBreeds};
use reqwest::blocking::Client;
use tracing::{debug, info, warn};

/// [`BreedSource`] backed by the dog.ceo REST API.
///
/// Every failure, from a refused connection to an unknown breed, is reported
/// as a [`BreedNotFoundError`] whose message quotes the breed exactly as the
/// caller passed it.
pub struct HttpBreedSource {
    client: Client,
    base_url: String,
}

impl HttpBreedSource {
    /// Create a source pointing at the public dog.ceo API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DogApiConfig::API_BASE)
    }

    /// Create a source pointing at another API root, e.g. a local mock.
    ///
    /// `base_url` is the part before `/breed/...`; a trailing `/` is ignored.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| BreedNotFoundError::with_source("Failed to create HTTP client", e))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a source reusing a caller-owned client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// The API root requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listing URL for an already-normalized breed name.
    ///
    /// The name is interpolated as-is, without percent-encoding.
    fn sub_breeds_url(&self, normalized: &str) -> String {
        format!("{}/breed/{}/list", self.base_url, normalized)
    }
}

impl BreedSource for HttpBreedSource {
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds> {
        let breed = breed.ok_or_else(|| BreedNotFoundError::new("Breed is null"))?;
        let normalized = normalize_breed(breed);
        if normalized.is_empty() {
            return Err(BreedNotFoundError::new("Breed is empty"));
        }

        let url = self.sub_breeds_url(&normalized);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            BreedNotFoundError::fetch_failed_with_source(breed, e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("GET {} returned {}", url, status);
            return Err(BreedNotFoundError::fetch_failed(breed));
        }

        let body = response.text().map_err(|e| {
            warn!("Failed to read response body from {}: {}", url, e);
            BreedNotFoundError::fetch_failed_with_source(breed, e)
        })?;

        let sub_breeds = parse_sub_breeds(&body, breed).inspect_err(|e| {
            warn!("Rejected response from {}: {}", url, e);
        })?;

        info!("Fetched {} sub-breeds for {}", sub_breeds.len(), normalized);
        Ok(SubBreeds::from(sub_breeds))
    }
}
