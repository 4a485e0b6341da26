use thiserror::Error;
use web_client::WebError;

/// High-level API errors for Spotify player operations
///
/// Abstracts away the HTTP transport and gives callers error kinds that map
/// onto what a player UI can do about them: retry, re-authenticate, or fix
/// the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection failures, timeouts and unreadable response bodies.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response parsing error
    ///
    /// The server answered successfully but the body did not match the
    /// expected shape.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Non-success HTTP status returned by the Web API
    ///
    /// Includes "no active device" (404) and "premium required" (403).
    #[error("HTTP {code}: {message}")]
    HttpStatus { code: u16, message: String },

    /// The access token was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid parameter value
    ///
    /// Returned before any request is sent, e.g. volume out of range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The token provider could not supply an access token
    #[error("Token error: {0}")]
    TokenError(String),
}

impl ApiError {
    /// Whether retrying the same call later could succeed
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::NetworkError(_) => true,
            ApiError::HttpStatus { code, .. } => *code == 429 || *code >= 500,
            _ => false,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<WebError> for ApiError {
    fn from(error: WebError) -> Self {
        match error {
            WebError::Network(msg) => ApiError::NetworkError(msg),
            WebError::Status { code, message } => ApiError::HttpStatus { code, message },
            WebError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            WebError::Configuration(msg) => ApiError::NetworkError(msg),
        }
    }
}

impl From<crate::operation::ValidationError> for ApiError {
    fn from(validation_error: crate::operation::ValidationError) -> Self {
        ApiError::InvalidParameter(validation_error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::ValidationError;

    #[test]
    fn test_web_error_conversion() {
        let api_error: ApiError = WebError::Network("connection timeout".to_string()).into();
        assert!(matches!(api_error, ApiError::NetworkError(_)));

        let api_error: ApiError = WebError::Status {
            code: 404,
            message: "No active device found".to_string(),
        }
        .into();
        assert!(matches!(api_error, ApiError::HttpStatus { code: 404, .. }));

        let api_error: ApiError = WebError::Unauthorized("expired".to_string()).into();
        assert!(matches!(api_error, ApiError::Unauthorized(_)));
    }

    #[test]
    fn test_validation_conversion() {
        let api_error: ApiError = ValidationError::range_error("volume_percent", 0, 100, 140).into();
        match api_error {
            ApiError::InvalidParameter(msg) => assert!(msg.contains("volume_percent")),
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_transient_classification() {
        assert!(ApiError::NetworkError("reset".to_string()).is_transient());
        assert!(ApiError::HttpStatus { code: 503, message: String::new() }.is_transient());
        assert!(ApiError::HttpStatus { code: 429, message: String::new() }.is_transient());
        assert!(!ApiError::HttpStatus { code: 404, message: String::new() }.is_transient());
        assert!(!ApiError::Unauthorized("expired".to_string()).is_transient());
    }

    #[test]
    fn test_error_display() {
        let err = ApiError::HttpStatus {
            code: 403,
            message: "Premium required".to_string(),
        };
        assert_eq!(format!("{}", err), "HTTP 403: Premium required");
    }
}
