//! SetRepeat operation

use web_client::HttpMethod;

use crate::models::RepeatState;
use crate::operation::{push_device, SpotifyOperation};
use crate::Result;

/// `PUT /me/player/repeat?state=off|context|track`
pub struct SetRepeatOperation;

/// Request for SetRepeat operation
#[derive(Debug, Clone, Default)]
pub struct SetRepeatRequest {
    pub state: RepeatState,
    pub device_id: Option<String>,
}

impl SpotifyOperation for SetRepeatOperation {
    type Request = SetRepeatRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/repeat";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("state", request.state.as_str().to_string())];
        push_device(&mut query, &request.device_id);
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
