//! GetQueue operation

use web_client::HttpMethod;

use crate::models::QueueObject;
use crate::operation::{parse_json, SpotifyOperation};
use crate::Result;

/// `GET /me/player/queue`
pub struct GetQueueOperation;

/// Request for GetQueue operation
#[derive(Debug, Clone, Default)]
pub struct GetQueueRequest;

impl SpotifyOperation for GetQueueOperation {
    type Request = GetQueueRequest;
    type Response = QueueObject;

    const METHOD: HttpMethod = HttpMethod::Get;
    const ENDPOINT: &'static str = "me/player/queue";

    fn parse_response(body: Option<&str>) -> Result<Self::Response> {
        match body {
            None => Ok(QueueObject {
                currently_playing: None,
                queue: Vec::new(),
            }),
            Some(_) => parse_json(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_parsing() {
        let body = r#"{
            "currently_playing": {"id": "a", "uri": "spotify:track:a", "name": "A", "duration_ms": 1000},
            "queue": [{"id": "b", "uri": "spotify:track:b", "name": "B", "duration_ms": 2000}]
        }"#;
        let queue = GetQueueOperation::parse_response(Some(body)).unwrap();
        assert_eq!(queue.currently_playing.unwrap().name, "A");
        assert_eq!(queue.queue.len(), 1);
    }

    #[test]
    fn test_empty_queue() {
        let queue = GetQueueOperation::parse_response(None).unwrap();
        assert!(queue.currently_playing.is_none());
        assert!(queue.queue.is_empty());
    }
}
