//! SetShuffle operation

use web_client::HttpMethod;

use crate::operation::{push_device, SpotifyOperation};
use crate::Result;

/// `PUT /me/player/shuffle?state=`
pub struct SetShuffleOperation;

/// Request for SetShuffle operation
#[derive(Debug, Clone, Default)]
pub struct SetShuffleRequest {
    pub state: bool,
    pub device_id: Option<String>,
}

impl SpotifyOperation for SetShuffleOperation {
    type Request = SetShuffleRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/shuffle";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("state", request.state.to_string())];
        push_device(&mut query, &request.device_id);
        query
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
