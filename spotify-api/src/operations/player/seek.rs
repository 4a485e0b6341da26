//! Seek operation

use web_client::HttpMethod;

use crate::operation::{push_device, SpotifyOperation};
use crate::Result;

/// `PUT /me/player/seek?position_ms=`
pub struct SeekOperation;

/// Request for Seek operation
#[derive(Debug, Clone, Default)]
pub struct SeekRequest {
    /// Positions past the end of the track skip to the next one
    pub position_ms: u64,
    pub device_id: Option<String>,
}

impl SpotifyOperation for SeekOperation {
    type Request = SeekRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/seek";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("position_ms", request.position_ms.to_string())];
        push_device(&mut query, &request.device_id);
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
