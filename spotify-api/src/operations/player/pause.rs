//! Pause operation

use web_client::HttpMethod;

use crate::operation::{push_device, SpotifyOperation};
use crate::Result;

/// `PUT /me/player/pause`
pub struct PauseOperation;

/// Request for Pause operation
#[derive(Debug, Clone, Default)]
pub struct PauseRequest {
    pub device_id: Option<String>,
}

impl SpotifyOperation for PauseOperation {
    type Request = PauseRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/pause";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        push_device(&mut query, &request.device_id);
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
