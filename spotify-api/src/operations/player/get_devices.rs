//! GetDevices operation

use web_client::HttpMethod;

use crate::models::{DeviceObject, DevicesEnvelope};
use crate::operation::{parse_json, SpotifyOperation};
use crate::Result;

/// `GET /me/player/devices`
pub struct GetDevicesOperation;

/// Request for GetDevices operation
#[derive(Debug, Clone, Default)]
pub struct GetDevicesRequest;

impl SpotifyOperation for GetDevicesOperation {
    type Request = GetDevicesRequest;
    type Response = Vec<DeviceObject>;

    const METHOD: HttpMethod = HttpMethod::Get;
    const ENDPOINT: &'static str = "me/player/devices";

    fn parse_response(body: Option<&str>) -> Result<Self::Response> {
        match body {
            None => Ok(Vec::new()),
            Some(_) => parse_json::<DevicesEnvelope>(body).map(|envelope| envelope.devices),
        }
    }
}
