//! AddToQueue operation

use web_client::HttpMethod;

use super::validate_spotify_uri;
use crate::operation::{push_device, SpotifyOperation, ValidationError};
use crate::Result;

/// `POST /me/player/queue?uri=`
pub struct AddToQueueOperation;

/// Request for AddToQueue operation
#[derive(Debug, Clone)]
pub struct AddToQueueRequest {
    pub uri: String,
    pub device_id: Option<String>,
}

impl SpotifyOperation for AddToQueueOperation {
    type Request = AddToQueueRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Post;
    const ENDPOINT: &'static str = "me/player/queue";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("uri", request.uri.clone())];
        push_device(&mut query, &request.device_id);
        query
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        validate_spotify_uri("uri", &request.uri)
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
