//! Read-only player state for rendering

use playback_state::{Device, DeviceId, PlaybackSnapshot, RepeatMode, SelectionState, TrackUri};
use serde::Serialize;

/// Everything a play bar or feed needs to render, published after every
/// command and poll
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerView {
    pub queue: Vec<TrackUri>,
    pub queue_index: Option<usize>,
    pub snapshot: Option<PlaybackSnapshot>,
    /// Presentation order: web players, then the active device, then the rest
    pub devices: Vec<Device>,
    pub active_device: Option<Device>,
    /// Where commands currently go: the first active listed device, or the
    /// snapshot's device before any device list has arrived
    pub active_device_id: Option<DeviceId>,
    pub selection: SelectionState,
    pub last_error: Option<String>,
}

impl PlayerView {
    pub fn track_name(&self) -> Option<&str> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.track.as_ref())
            .map(|t| t.name.as_str())
    }

    pub fn artist(&self) -> Option<&str> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.track.as_ref())
            .and_then(|t| t.primary_artist())
    }

    pub fn artwork_url(&self) -> Option<&str> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.track.as_ref())
            .and_then(|t| t.artwork_url.as_deref())
    }

    pub fn current_track_uri(&self) -> Option<&TrackUri> {
        self.snapshot.as_ref().and_then(|s| s.current_track_uri.as_ref())
    }

    pub fn progress_ms(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.progress_ms)
    }

    pub fn duration_ms(&self) -> u64 {
        self.snapshot.as_ref().map_or(0, |s| s.duration_ms)
    }

    pub fn is_playing(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.is_playing)
    }

    pub fn shuffle(&self) -> bool {
        self.snapshot.as_ref().is_some_and(|s| s.shuffle)
    }

    pub fn repeat(&self) -> RepeatMode {
        self.snapshot.as_ref().map_or(RepeatMode::Off, |s| s.repeat)
    }

    /// Device volume, from the snapshot or the active device entry
    pub fn volume_percent(&self) -> Option<u8> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.volume_percent)
            .or_else(|| self.active_device.as_ref().and_then(|d| d.volume_percent))
    }

    pub fn has_active_device(&self) -> bool {
        self.active_device_id.is_some()
    }

    pub fn needs_device_selection(&self) -> bool {
        self.selection == SelectionState::Open
    }

    /// Track at the queue position, not necessarily what is playing
    pub fn queued_track(&self) -> Option<&TrackUri> {
        self.queue_index.and_then(|i| self.queue.get(i))
    }

    /// `"1:05 / 3:20"`
    pub fn progress_label(&self) -> String {
        format!("{} / {}", format_time(self.progress_ms()), format_time(self.duration_ms()))
    }
}

/// Format milliseconds as `m:ss`
pub fn format_time(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1000;
    format!("{}:{:02}", minutes, seconds)
}
