//! Wire model for the `/breed/<name>/list` endpoint.
//!
//! A found breed comes back as
//! `{"message": ["afghan", "basset"], "status": "success"}`; an unknown one as
//! `{"status": "error", "message": "Breed not found (main breed does not exist)", "code": 404}`.

use crate::config::DogApiConfig;
use crate::error::{BreedNotFoundError, Result};
use serde_json::{Map, Value};

/// Whether the envelope's `status` is exactly the success literal.
///
/// A missing or non-string `status` counts as failure.
fn is_success(envelope: &Map<String, Value>) -> bool {
    matches!(envelope.get("status"), Some(Value::String(s)) if s == DogApiConfig::STATUS_SUCCESS)
}

/// Decode a response body into the sub-breed names, in the order received.
///
/// `breed` is the caller's original argument and only appears in messages.
pub(crate) fn parse_sub_breeds(body: &str, breed: &str) -> Result<Vec<String>> {
    // Anything but a JSON object is a malformed body.
    let mut envelope: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| BreedNotFoundError::fetch_failed_with_source(breed, e))?;

    if !is_success(&envelope) {
        return Err(BreedNotFoundError::not_found(breed));
    }

    match envelope.remove("message") {
        Some(message @ Value::Array(_)) => serde_json::from_value(message)
            .map_err(|e| BreedNotFoundError::fetch_failed_with_source(breed, e)),
        _ => Err(BreedNotFoundError::unexpected_format(breed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_success_preserves_order() {
        let body = r#"{"message":["affenpinscher","basset"],"status":"success"}"#;
        let names = parse_sub_breeds(body, "hound").unwrap();
        assert_eq!(names, vec!["affenpinscher", "basset"]);
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        let body = r#"{"message":["basset","basset"],"status":"success"}"#;
        assert_eq!(parse_sub_breeds(body, "hound").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_empty_list() {
        let body = r#"{"message":[],"status":"success"}"#;
        assert!(parse_sub_breeds(body, "akita").unwrap().is_empty());
    }

    #[test]
    fn test_parse_error_status() {
        let body = r#"{"status":"error","message":"Breed not found (main breed does not exist)","code":404}"#;
        let err = parse_sub_breeds(body, "xyz").unwrap_err();
        assert_eq!(err.message(), "Breed not found: 'xyz'");
        assert!(!err.has_source());
    }

    #[test]
    fn test_parse_missing_or_non_string_status() {
        let err = parse_sub_breeds(r#"{"message":["a"]}"#, "Hound").unwrap_err();
        assert_eq!(err.message(), "Breed not found: 'Hound'");

        let err = parse_sub_breeds(r#"{"message":["a"],"status":1}"#, "Hound").unwrap_err();
        assert_eq!(err.message(), "Breed not found: 'Hound'");

        let err = parse_sub_breeds(r#"{"message":["a"],"status":"SUCCESS"}"#, "Hound").unwrap_err();
        assert_eq!(err.message(), "Breed not found: 'Hound'");
    }

    #[test]
    fn test_parse_message_not_a_list() {
        let err = parse_sub_breeds(r#"{"status":"success","message":"basset"}"#, "hound").unwrap_err();
        assert_eq!(err.message(), "Unexpected API response format for 'hound'");

        let err = parse_sub_breeds(r#"{"status":"success"}"#, "hound").unwrap_err();
        assert_eq!(err.message(), "Unexpected API response format for 'hound'");
    }

    #[test]
    fn test_parse_non_string_entries() {
        let err = parse_sub_breeds(r#"{"status":"success","message":["a",3]}"#, "hound").unwrap_err();
        assert_eq!(err.message(), "Failed to fetch sub-breeds for 'hound'");
        assert!(err.has_source());
    }

    #[test]
    fn test_parse_malformed_body() {
        for body in ["", "not json", "[1,2,3]", r#"{"status":"success""#] {
            let err = parse_sub_breeds(body, " Hound").unwrap_err();
            assert_eq!(err.message(), "Failed to fetch sub-breeds for ' Hound'");
            assert!(err.has_source(), "body {:?} should carry a parse error", body);
        }
    }
}
