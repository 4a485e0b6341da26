//! Play operations: start specific tracks, or resume the current context

use serde_json::{json, Value};
use web_client::HttpMethod;

use super::validate_spotify_uri;
use crate::operation::{push_device, SpotifyOperation, ValidationError};
use crate::Result;

/// `PUT /me/player/play` with `{"uris": [...]}`
pub struct PlayTrackOperation;

/// Request for PlayTrack operation
#[derive(Debug, Clone)]
pub struct PlayTrackRequest {
    pub uris: Vec<String>,
    pub device_id: Option<String>,
}

impl PlayTrackRequest {
    pub fn single(uri: impl Into<String>, device_id: Option<String>) -> Self {
        Self {
            uris: vec![uri.into()],
            device_id,
        }
    }
}

impl SpotifyOperation for PlayTrackOperation {
    type Request = PlayTrackRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/play";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_device(&mut query, &request.device_id);
        query
    }

    fn body(request: &Self::Request) -> Option<Value> {
        Some(json!({ "uris": request.uris }))
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        if request.uris.is_empty() {
            return Err(ValidationError::invalid_value(
                "uris",
                "[]",
                "at least one track URI is required",
            ));
        }
        for uri in &request.uris {
            validate_spotify_uri("uris", uri)?;
        }
        Ok(())
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}

/// `PUT /me/player/play` without a body
pub struct ResumeOperation;

/// Request for Resume operation
#[derive(Debug, Clone, Default)]
pub struct ResumeRequest {
    pub device_id: Option<String>,
}

impl SpotifyOperation for ResumeOperation {
    type Request = ResumeRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/play";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_device(&mut query, &request.device_id);
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_track_query_and_body() {
        let request = PlayTrackRequest::single("spotify:track:abc", Some("dev-1".to_string()));

        assert_eq!(
            PlayTrackOperation::query(&request),
            vec![("device_id", "dev-1".to_string())]
        );
        assert_eq!(
            PlayTrackOperation::body(&request),
            Some(json!({"uris": ["spotify:track:abc"]}))
        );
        assert!(PlayTrackOperation::validate(&request).is_ok());
    }

    #[test]
    fn test_play_track_without_device() {
        let request = PlayTrackRequest::single("spotify:track:abc", None);
        assert!(PlayTrackOperation::query(&request).is_empty());
    }

    #[test]
    fn test_play_track_validation() {
        let empty = PlayTrackRequest {
            uris: Vec::new(),
            device_id: None,
        };
        assert!(PlayTrackOperation::validate(&empty).is_err());

        let bare_id = PlayTrackRequest::single("abc", None);
        assert!(PlayTrackOperation::validate(&bare_id).is_err());
    }

    #[test]
    fn test_resume_has_no_body() {
        let request = ResumeRequest {
            device_id: Some("dev-2".to_string()),
        };
        assert!(ResumeOperation::body(&request).is_none());
        assert_eq!(ResumeOperation::path(&request), "me/player/play");
        assert_eq!(ResumeOperation::query(&request).len(), 1);
    }
}
