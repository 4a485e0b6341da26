//! Point-in-time playback state

use serde::{Deserialize, Serialize};

use super::{DeviceId, RepeatMode, TrackUri};

/// Display details of the reported track
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub artists: Vec<String>,
    pub album: Option<String>,
    pub artwork_url: Option<String>,
}

impl TrackSummary {
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(String::as_str)
    }

    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }
}

/// Read-only view of external playback, as last polled
///
/// May lag reality by up to one polling interval. Snapshots never mutate
/// the queue directly; the controller only reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    pub current_track_uri: Option<TrackUri>,
    pub is_playing: bool,
    pub progress_ms: u64,
    pub duration_ms: u64,
    pub active_device_id: Option<DeviceId>,
    pub track: Option<TrackSummary>,
    pub shuffle: bool,
    pub repeat: RepeatMode,
    pub volume_percent: Option<u8>,
}

impl PlaybackSnapshot {
    /// A snapshot of `uri` at the given position
    pub fn of_track(uri: impl Into<TrackUri>, is_playing: bool, progress_ms: u64, duration_ms: u64) -> Self {
        Self {
            current_track_uri: Some(uri.into()),
            is_playing,
            progress_ms,
            duration_ms,
            ..Default::default()
        }
    }

    pub fn on_device(mut self, device: impl Into<DeviceId>) -> Self {
        self.active_device_id = Some(device.into());
        self
    }

    pub fn with_track(mut self, track: TrackSummary) -> Self {
        self.track = Some(track);
        self
    }

    /// Time left in the current track; zero once progress passes duration
    pub fn remaining_ms(&self) -> u64 {
        self.duration_ms.saturating_sub(self.progress_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_saturates() {
        let snapshot = PlaybackSnapshot::of_track("spotify:track:a", true, 5000, 4000);
        assert_eq!(snapshot.remaining_ms(), 0);

        let snapshot = PlaybackSnapshot::of_track("spotify:track:a", true, 1000, 4000);
        assert_eq!(snapshot.remaining_ms(), 3000);
    }

    #[test]
    fn test_artist_line() {
        let track = TrackSummary {
            name: "Cello Song".to_string(),
            artists: vec!["Nick Drake".to_string(), "Danny Thompson".to_string()],
            ..Default::default()
        };
        assert_eq!(track.primary_artist(), Some("Nick Drake"));
        assert_eq!(track.artist_line(), "Nick Drake, Danny Thompson");
        assert_eq!(TrackSummary::default().primary_artist(), None);
    }

    #[test]
    fn test_builder() {
        let snapshot = PlaybackSnapshot::of_track("spotify:track:a", false, 0, 1).on_device("dev");
        assert_eq!(snapshot.active_device_id, Some(DeviceId::new("dev")));
        assert!(!snapshot.is_playing);
    }
}
