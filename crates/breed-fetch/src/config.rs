//! Centralized configuration constants.

/// Upstream dog breed API configuration.
pub struct DogApiConfig;

impl DogApiConfig {
    pub const API_BASE: &'static str = "https://dog.ceo/api";
    /// Literal `status` value the API sends with a successful answer.
    pub const STATUS_SUCCESS: &'static str = "success";
}
