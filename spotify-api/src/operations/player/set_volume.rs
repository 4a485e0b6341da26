//! SetVolume operation

use web_client::HttpMethod;

use crate::operation::{push_device, SpotifyOperation, ValidationError};
use crate::Result;

/// `PUT /me/player/volume?volume_percent=`
pub struct SetVolumeOperation;

/// Request for SetVolume operation
#[derive(Debug, Clone, Default)]
pub struct SetVolumeRequest {
    pub volume_percent: u8,
    pub device_id: Option<String>,
}

impl SpotifyOperation for SetVolumeOperation {
    type Request = SetVolumeRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Put;
    const ENDPOINT: &'static str = "me/player/volume";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        let mut query = vec![("volume_percent", request.volume_percent.to_string())];
        push_device(&mut query, &request.device_id);
        query
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        if request.volume_percent > 100 {
            return Err(ValidationError::range_error(
                "volume_percent",
                0,
                100,
                request.volume_percent,
            ));
        }
        Ok(())
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
