//! RecentlyPlayed operation

use web_client::HttpMethod;

use crate::models::RecentlyPlayedObject;
use crate::operation::{parse_json, SpotifyOperation, ValidationError};
use crate::Result;

/// `GET /me/player/recently-played?limit=`
pub struct RecentlyPlayedOperation;

/// Request for RecentlyPlayed operation
#[derive(Debug, Clone)]
pub struct RecentlyPlayedRequest {
    /// 1..=50
    pub limit: u8,
}

impl Default for RecentlyPlayedRequest {
    fn default() -> Self {
        Self { limit: 20 }
    }
}

impl SpotifyOperation for RecentlyPlayedOperation {
    type Request = RecentlyPlayedRequest;
    type Response = RecentlyPlayedObject;

    const METHOD: HttpMethod = HttpMethod::Get;
    const ENDPOINT: &'static str = "me/player/recently-played";

    fn query(request: &Self::Request) -> Vec<(&'static str, String)> {
        vec![("limit", request.limit.to_string())]
    }

    fn validate(request: &Self::Request) -> std::result::Result<(), ValidationError> {
        if !(1..=50).contains(&request.limit) {
            return Err(ValidationError::range_error("limit", 1, 50, request.limit));
        }
        Ok(())
    }

    fn parse_response(body: Option<&str>) -> Result<Self::Response> {
        match body {
            None => Ok(RecentlyPlayedObject { items: Vec::new() }),
            Some(_) => parse_json(body),
        }
    }
}
