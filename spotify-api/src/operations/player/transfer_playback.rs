//! TransferPlayback operation

use serde_json::{json, Value};
use web_client::HttpMethod;

use crate::operation::{SpotifyOperation, ValidationError};
use crate::Result;

/// `PUT /me/player` with `{"device_ids": [id]}`
pub struct TransferPlaybackOperation;

/// Request for TransferPlayback operation
#[derive(Debug, Clone)]
pub struct TransferPlaybackRequest {
    pub device_id: String,
    /// Start playing on the new device instead of keeping the current state
    pub play: bool,
}

impl SpotifyOperation for TransferPlaybackOperation {
    type Request = TransferPlaybackRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player";

    fn body(request: &Self::Request) -> Option<Value> {
        Some(json!({
            "device_ids": [request.device_id],
            "play": request.play,
        }))
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        if request.device_id.trim().is_empty() {
            return Err(ValidationError::invalid_value(
                "device_id",
                &request.device_id,
                "device id must not be empty",
            ));
        }
        Ok(())
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
