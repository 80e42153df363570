//! Normalized API failures.

use shared::ErrorBody;
use thiserror::Error;

/// Fallback message when a failure carries no usable payload.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong with API";

pub type Result<T> = std::result::Result<T, ApiError>;

/// The one failure kind surfaced by the API layer.
///
/// Transport errors, structured validation lists, single backend messages,
/// and unclassified failures all collapse into a single human-readable
/// message. Callers display it; they never branch on an error kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fallback failure for anything without a recognizable payload.
    pub fn generic() -> Self {
        Self::new(GENERIC_ERROR_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Derive the failure message from a backend error payload.
    ///
    /// A non-empty `errors` list joins its entry messages with `", "`; an
    /// empty list falls through to the `message` field. Bodies matching
    /// neither accepted shape yield the generic fallback.
    pub(crate) fn from_error_body(bytes: &[u8]) -> Self {
        let body: ErrorBody = match serde_json::from_slice(bytes) {
            Ok(body) => body,
            Err(_) => return Self::generic(),
        };

        if let Some(entries) = &body.errors {
            if !entries.is_empty() {
                let joined = entries
                    .iter()
                    .map(|entry| entry.message.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                return Self::new(joined);
            }
        }

        match body.message {
            Some(message) => Self::new(message),
            None => Self::generic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_errors_join_with_comma() {
        let err = ApiError::from_error_body(
            br#"{"errors": [{"message": "A"}, {"message": "B"}]}"#,
        );
        assert_eq!(err.message(), "A, B");
        assert_eq!(err.to_string(), "A, B");
    }

    #[test]
    fn test_single_backend_message_used_verbatim() {
        let err = ApiError::from_error_body(br#"{"message": "X"}"#);
        assert_eq!(err.message(), "X");
    }

    #[test]
    fn test_errors_array_wins_over_message() {
        let err = ApiError::from_error_body(
            br#"{"errors": [{"message": "A"}], "message": "ignored"}"#,
        );
        assert_eq!(err.message(), "A");
    }

    #[test]
    fn test_empty_errors_array_falls_through_to_message() {
        let err = ApiError::from_error_body(br#"{"errors": [], "message": "X"}"#);
        assert_eq!(err.message(), "X");

        let err = ApiError::from_error_body(br#"{"errors": []}"#);
        assert_eq!(err, ApiError::generic());
    }

    #[test]
    fn test_unrecognized_payloads_get_the_fallback() {
        assert_eq!(ApiError::from_error_body(b"boom"), ApiError::generic());
        assert_eq!(ApiError::from_error_body(br#"{"status": 500}"#), ApiError::generic());
        assert_eq!(ApiError::from_error_body(b""), ApiError::generic());
        assert_eq!(
            ApiError::generic().message(),
            "Something went wrong with API"
        );
    }
}
