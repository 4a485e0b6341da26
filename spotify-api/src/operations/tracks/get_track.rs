//! GetTrack operation

use web_client::HttpMethod;

use crate::models::TrackObject;
use crate::operation::{parse_json, SpotifyOperation, ValidationError};
use crate::Result;

/// `GET /tracks/{id}`
pub struct GetTrackOperation;

/// Request for GetTrack operation
#[derive(Debug, Clone)]
pub struct GetTrackRequest {
    /// Bare track id, not a URI
    pub id: String,
}

impl SpotifyOperation for GetTrackOperation {
    type Request = GetTrackRequest;
    type Response = TrackObject;

    const METHOD: HttpMethod = HttpMethod::Get;
    const ENDPOINT: &'static str = "tracks";

    fn path(request: &Self::Request) -> String {
        format!("{}/{}", Self::ENDPOINT, request.id)
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        if request.id.is_empty() || !request.id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::invalid_value(
                "id",
                &request.id,
                "expected a base-62 track id",
            ));
        }
        Ok(())
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response> {
        parse_json(body)
    }
}
