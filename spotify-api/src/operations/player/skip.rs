//! SkipToNext and SkipToPrevious operations

use web_client::HttpMethod;

use crate::operation::{push_device, SpotifyOperation};
use crate::Result;

/// Request shared by both skip operations
#[derive(Debug, Clone, Default)]
pub struct SkipRequest {
    pub device_id: Option<String>,
}

fn skip_query(request: &SkipRequest) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    push_device(&mut query, &request.device_id);
    query
}

/// `POST /me/player/next`
pub struct SkipToNextOperation;

impl SpotifyOperation for SkipToNextOperation {
    type Request = SkipRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Post;
    const ENDPOINT: &'static str = "me/player/next";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        skip_query(request)
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}

/// `POST /me/player/previous`
pub struct SkipToPreviousOperation;

impl SpotifyOperation for SkipToPreviousOperation {
    type Request = SkipRequest;
    type Response = ();

    const METHOD: HttpMethod = HttpMethod::Post;
    const ENDPOINT: &'static str = "me/player/previous";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        skip_query(request)
    }

    fn parse_response(_body: Option<&str>) -> Result<Self::Response> {
        Ok(())
    }
}
