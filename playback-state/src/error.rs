//! Error types for playback-state

use spotify_api::ApiError;
use thiserror::Error;

/// Failure reported by a collaborator (snapshot source, registry, gateway)
///
/// All variants are transient from the controller's point of view: they are
/// returned to the caller and never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// Network failure or error status from the upstream service
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Credentials were rejected or unavailable
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The upstream service rejected the command's arguments
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Unauthorized(msg) | ApiError::TokenError(msg) => GatewayError::Unauthorized(msg),
            ApiError::InvalidParameter(msg) => GatewayError::InvalidCommand(msg),
            other => GatewayError::Upstream(other.to_string()),
        }
    }
}

/// Result type for collaborator calls
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Errors returned by queue controller operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Argument rejected before anything was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_conversion() {
        let err: GatewayError = ApiError::HttpStatus {
            code: 404,
            message: "No active device found".to_string(),
        }
        .into();
        assert_eq!(
            err,
            GatewayError::Upstream("HTTP 404: No active device found".to_string())
        );

        let err: GatewayError = ApiError::TokenError("missing".to_string()).into();
        assert!(matches!(err, GatewayError::Unauthorized(_)));

        let err: GatewayError = ApiError::InvalidParameter("volume".to_string()).into();
        assert!(matches!(err, GatewayError::InvalidCommand(_)));
    }

    #[test]
    fn test_controller_error_is_transparent() {
        let err: ControllerError = GatewayError::Upstream("timeout".to_string()).into();
        assert_eq!(err.to_string(), "Upstream error: timeout");
    }
}
