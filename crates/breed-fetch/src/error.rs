//! Error type for breed lookups.
//!
//! Every failure a [`BreedSource`](crate::BreedSource) can report is a
//! [`BreedNotFoundError`]: invalid input, transport failure, malformed
//! responses and genuine not-found answers from the upstream API alike.
//! Callers tell them apart by message text only.

use thiserror::Error;

/// Boxed underlying cause carried by a [`BreedNotFoundError`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The single failure kind of a breed lookup.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BreedNotFoundError {
    message: String,
    #[source]
    source: Option<BoxedCause>,
}

/// Result type alias for breed lookups.
pub type Result<T> = std::result::Result<T, BreedNotFoundError>;

impl BreedNotFoundError {
    /// Create an error with a message and no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create an error wrapping the cause that triggered it.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The request for `breed` could not be completed or its body was unusable.
    pub fn fetch_failed(breed: &str) -> Self {
        Self::new(fetch_failed_message(breed))
    }

    /// Like [`fetch_failed`](Self::fetch_failed), keeping the transport or
    /// parse error as the cause.
    pub fn fetch_failed_with_source(
        breed: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(fetch_failed_message(breed), source)
    }

    /// The upstream API answered with a non-success status for `breed`.
    pub fn not_found(breed: &str) -> Self {
        Self::new(format!("Breed not found: '{}'", breed))
    }

    /// The upstream API answered with success but no sub-breed list.
    pub fn unexpected_format(breed: &str) -> Self {
        Self::new(format!("Unexpected API response format for '{}'", breed))
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether an underlying cause is attached.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }
}

fn fetch_failed_message(breed: &str) -> String {
    format!("Failed to fetch sub-breeds for '{}'", breed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = BreedNotFoundError::new("Breed is null");
        assert_eq!(err.to_string(), "Breed is null");
        assert_eq!(err.message(), "Breed is null");
        assert!(err.source().is_none());
        assert!(!err.has_source());
    }

    #[test]
    fn test_error_with_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = BreedNotFoundError::with_source("Failed to fetch sub-breeds for 'hound'", cause);

        assert_eq!(err.to_string(), "Failed to fetch sub-breeds for 'hound'");
        assert!(err.has_source());
        let source = err.source().expect("cause should be attached");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn test_messages_quote_original_breed() {
        assert_eq!(
            BreedNotFoundError::fetch_failed("  Hound ").to_string(),
            "Failed to fetch sub-breeds for '  Hound '"
        );
        assert_eq!(
            BreedNotFoundError::not_found("xyz").to_string(),
            "Breed not found: 'xyz'"
        );
        assert_eq!(
            BreedNotFoundError::unexpected_format("Akita").to_string(),
            "Unexpected API response format for 'Akita'"
        );
    }
}
