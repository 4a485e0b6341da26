//! Wire models for the Spotify Web API player endpoints
//!
//! Only the fields the player uses are modeled; serde ignores the rest.

use serde::{Deserialize, Serialize};

/// A playback device as reported by `GET /me/player/devices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceObject {
    /// Can be null for restricted devices
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub device_type: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_restricted: bool,
    pub volume_percent: Option<u8>,
}

/// Envelope of the device list endpoint
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DevicesEnvelope {
    #[serde(default)]
    pub devices: Vec<DeviceObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistObject {
    pub name: String,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumObject {
    pub name: String,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

/// A track, as embedded in playback state or returned by `GET /tracks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackObject {
    pub id: Option<String>,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub duration_ms: u64,
    #[serde(default)]
    pub artists: Vec<ArtistObject>,
    pub album: Option<AlbumObject>,
}

impl TrackObject {
    /// URL of the first (largest) album image
    pub fn artwork_url(&self) -> Option<&str> {
        self.album
            .as_ref()
            .and_then(|album| album.images.first())
            .map(|image| image.url.as_str())
    }

    /// Artist names joined for display
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|artist| artist.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Repeat mode wire values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatState {
    #[default]
    Off,
    Context,
    Track,
}

impl RepeatState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatState::Off => "off",
            RepeatState::Context => "context",
            RepeatState::Track => "track",
        }
    }
}

/// Response of `GET /me/player`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackStateObject {
    pub device: Option<DeviceObject>,
    #[serde(default)]
    pub is_playing: bool,
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub shuffle_state: bool,
    #[serde(default)]
    pub repeat_state: RepeatState,
    /// Null while an ad or an unsupported item is playing
    pub item: Option<TrackObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayHistoryObject {
    pub track: TrackObject,
    pub played_at: String,
}

/// Response of `GET /me/player/recently-played`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyPlayedObject {
    #[serde(default)]
    pub items: Vec<PlayHistoryObject>,
}

/// Response of `GET /me/player/queue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueObject {
    pub currently_playing: Option<TrackObject>,
    #[serde(default)]
    pub queue: Vec<TrackObject>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYBACK_JSON: &str = r#"{
        "device": {
            "id": "dev-1",
            "is_active": true,
            "is_private_session": false,
            "is_restricted": false,
            "name": "From The Morning Web Player",
            "type": "Computer",
            "volume_percent": 50,
            "supports_volume": true
        },
        "repeat_state": "context",
        "shuffle_state": true,
        "timestamp": 1700000000000,
        "progress_ms": 42000,
        "is_playing": true,
        "currently_playing_type": "track",
        "item": {
            "id": "74cJ1kgYyhIBcLrvD0Kfo8",
            "uri": "spotify:track:74cJ1kgYyhIBcLrvD0Kfo8",
            "name": "From the Morning",
            "duration_ms": 150000,
            "artists": [{ "name": "Nick Drake", "uri": "spotify:artist:5c3StNNSXi3ZzAXG7RX4oM" }],
            "album": {
                "name": "Pink Moon",
                "images": [
                    { "url": "https://i.scdn.co/image/large", "width": 640, "height": 640 },
                    { "url": "https://i.scdn.co/image/small", "width": 64, "height": 64 }
                ]
            }
        }
    }"#;

    #[test]
    fn test_playback_state_parsing() {
        let state: PlaybackStateObject = serde_json::from_str(PLAYBACK_JSON).unwrap();
        assert!(state.is_playing);
        assert!(state.shuffle_state);
        assert_eq!(state.repeat_state, RepeatState::Context);
        assert_eq!(state.progress_ms, Some(42000));

        let device = state.device.unwrap();
        assert_eq!(device.id.as_deref(), Some("dev-1"));
        assert_eq!(device.device_type, "Computer");
        assert_eq!(device.volume_percent, Some(50));

        let item = state.item.unwrap();
        assert_eq!(item.duration_ms, 150000);
        assert_eq!(item.artist_names(), "Nick Drake");
        assert_eq!(item.artwork_url(), Some("https://i.scdn.co/image/large"));
    }

    #[test]
    fn test_playback_state_without_item() {
        let json = r#"{"device": null, "is_playing": false, "progress_ms": null, "item": null}"#;
        let state: PlaybackStateObject = serde_json::from_str(json).unwrap();
        assert!(state.item.is_none());
        assert_eq!(state.repeat_state, RepeatState::Off);
    }

    #[test]
    fn test_restricted_device_with_null_id() {
        let json = r#"{"id": null, "name": "Kitchen", "type": "Speaker", "is_active": false, "volume_percent": null}"#;
        let device: DeviceObject = serde_json::from_str(json).unwrap();
        assert!(device.id.is_none());
        assert!(device.volume_percent.is_none());
    }

    #[test]
    fn test_repeat_state_wire_values() {
        assert_eq!(serde_json::to_string(&RepeatState::Track).unwrap(), "\"track\"");
        assert_eq!(RepeatState::Context.as_str(), "context");
    }
}
