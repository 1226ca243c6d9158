//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Everything that can go wrong between the client and the backend.
///
/// Callers treat all three variants as a single failure outcome: the kind
/// only decides which generic text the user sees, never control flow. Raw
/// detail is logged at the effect layer and does not reach the UI.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: connection refused, timeout, DNS.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-success status code. The body is not
    /// parsed in this case.
    #[error("server returned HTTP {0}")]
    Http(u16),

    /// The server answered with a success status but the body did not parse
    /// into the expected shape.
    #[error("malformed response body: {0}")]
    Decode(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
    pub(crate) fn decode(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Box::new(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = ApiError::Http(503);
        assert_eq!(err.to_string(), "server returned HTTP 503");
    }

    #[test]
    fn test_decode_error_wraps_source() {
        let source = serde_json::from_str::<u32>("not json").unwrap_err();
        let err = ApiError::decode(source);
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
