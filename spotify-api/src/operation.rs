//! Operation framework for Spotify Web API endpoints
//!
//! Each endpoint is a zero-sized type implementing [`SpotifyOperation`]. The
//! trait ties together the HTTP method, path, query string, JSON body and
//! response parsing so [`crate::SpotifyClient::execute`] can run any of them.

use serde::de::DeserializeOwned;
use serde_json::Value;
use web_client::HttpMethod;

use crate::error::{ApiError, Result};

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Parameter '{parameter}' value '{value}' is out of range ({min}..={max})")]
    RangeError {
        parameter: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("Parameter '{parameter}' value '{value}' is invalid: {reason}")]
    InvalidValue {
        parameter: String,
        value: String,
        reason: String,
    },
}

impl ValidationError {
    pub fn range_error(
        parameter: &str,
        min: impl std::fmt::Display,
        max: impl std::fmt::Display,
        value: impl std::fmt::Display,
    ) -> Self {
        Self::RangeError {
            parameter: parameter.to_string(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn invalid_value(parameter: &str, value: impl std::fmt::Display, reason: &str) -> Self {
        Self::InvalidValue {
            parameter: parameter.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Base trait for all Spotify Web API operations
pub trait SpotifyOperation {
    /// The typed request data
    type Request;

    /// The typed response data
    type Response;

    /// HTTP verb of the endpoint
    const METHOD: HttpMethod;

    /// Endpoint path relative to the API base URL
    const ENDPOINT: &'static str;

    /// Resolve the request path; endpoints with path parameters override this
    fn path(_request: &Self::Request) -> String {
        Self::ENDPOINT.to_string()
    }

    /// Query string parameters
    fn query(_request: &Self::Request) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON request body
    fn body(_request: &Self::Request) -> Option<Value> {
        None
    }

    /// Boundary validation run before anything is sent
    fn validate(_request: &Self::Request) -> std::result::Result<(), ValidationError> {
        Ok(())
    }

    /// Parse the raw response body (`None` for 204 / empty responses)
    fn parse_response(body: Option<&str>) -> Result<Self::Response>;
}

/// Parse a JSON body that must be present
pub(crate) fn parse_json<T: DeserializeOwned>(body: Option<&str>) -> Result<T> {
    let body = body.ok_or_else(|| ApiError::ParseError("empty response body".to_string()))?;
    serde_json::from_str(body).map_err(|e| ApiError::ParseError(e.to_string()))
}

/// Parse a JSON body where an empty response means "nothing"
pub(crate) fn parse_optional_json<T: DeserializeOwned>(body: Option<&str>) -> Result<Option<T>> {
    match body {
        None => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(|e| ApiError::ParseError(e.to_string())),
    }
}

/// Push the optional `device_id` query parameter shared by the player endpoints
pub(crate) fn push_device(query: &mut Vec<(&'static str, String)>, device_id: &Option<String>) {
    if let Some(id) = device_id {
        query.push(("device_id", id.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: u32,
    }

    #[test]
    fn test_parse_json_requires_body() {
        let result: Result<Sample> = parse_json(None);
        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_parse_json() {
        let sample: Sample = parse_json(Some(r#"{"value": 7}"#)).unwrap();
        assert_eq!(sample, Sample { value: 7 });
    }

    #[test]
    fn test_parse_optional_json() {
        let empty: Option<Sample> = parse_optional_json(None).unwrap();
        assert!(empty.is_none());

        let bad: Result<Option<Sample>> = parse_optional_json(Some("not json"));
        assert!(matches!(bad, Err(ApiError::ParseError(_))));
    }

    #[test]
    fn test_push_device() {
        let mut query = Vec::new();
        push_device(&mut query, &None);
        assert!(query.is_empty());

        push_device(&mut query, &Some("dev-1".to_string()));
        assert_eq!(query, vec![("device_id", "dev-1".to_string())]);
    }

    #[test]
    fn test_range_error_message() {
        let error = ValidationError::range_error("limit", 1, 50, 80);
        assert_eq!(
            error.to_string(),
            "Parameter 'limit' value '80' is out of range (1..=50)"
        );
    }
}
