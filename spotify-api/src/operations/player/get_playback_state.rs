//! GetPlaybackState operation

use web_client::HttpMethod;

use crate::models::PlaybackStateObject;
use crate::operation::{parse_optional_json, SpotifyOperation};
use crate::Result;

/// `GET /me/player`
pub struct GetPlaybackStateOperation;

/// Request for GetPlaybackState operation
#[derive(Debug, Clone, Default)]
pub struct GetPlaybackStateRequest;

impl SpotifyOperation for GetPlaybackStateOperation {
    type Request = GetPlaybackStateRequest;
    /// `None` when nothing is playing (204)
    type Response = Option<PlaybackStateObject>;

    const METHOD: HttpMethod = HttpMethod::Get;
    const ENDPOINT: &'static str = "me/player";

    fn parse_response(body: Option<&str>) -> Result<Self::Response> {
        parse_optional_json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_means_nothing_playing() {
        let response = GetPlaybackStateOperation::parse_response(None).unwrap();
        assert!(response.is_none());
    }

    #[test]
    fn test_playback_state_response_parsing() {
        let body = r#"{
            "device": {"id": "d1", "name": "Den", "type": "Speaker", "is_active": true, "volume_percent": 30},
            "is_playing": false,
            "progress_ms": 1000,
            "shuffle_state": false,
            "repeat_state": "track",
            "item": {"id": "t1", "uri": "spotify:track:t1", "name": "Road", "duration_ms": 200000, "artists": []}
        }"#;

        let state = GetPlaybackStateOperation::parse_response(Some(body))
            .unwrap()
            .unwrap();
        assert!(!state.is_playing);
        assert_eq!(state.item.unwrap().uri, "spotify:track:t1");
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            GetPlaybackStateOperation::path(&GetPlaybackStateRequest),
            "me/player"
        );
        assert_eq!(GetPlaybackStateOperation::METHOD, HttpMethod::Get);
    }
}
