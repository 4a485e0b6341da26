//! Collaborator seams
//!
//! The controller talks to the outside world only through these traits. The
//! Spotify Web API implements all three (see [`crate::spotify`]); tests use
//! in-memory mocks.

use async_trait::async_trait;

use crate::error::GatewayResult;
use crate::model::{Device, DeviceId, PlaybackSnapshot, RepeatMode, TrackUri};

/// Supplies the latest playback state
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// `Ok(None)` when nothing is playing anywhere
    async fn fetch_snapshot(&self) -> GatewayResult<Option<PlaybackSnapshot>>;
}

/// Lists devices and moves playback between them
#[async_trait]
pub trait DeviceRegistry: Send + Sync {
    async fn list_devices(&self) -> GatewayResult<Vec<Device>>;

    async fn transfer_playback(&self, device: &DeviceId) -> GatewayResult<()>;
}

/// Playback commands, always addressed to a specific device
#[async_trait]
pub trait TrackCommandGateway: Send + Sync {
    async fn play_track(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()>;

    /// Continue whatever the device has loaded
    async fn resume(&self, device: &DeviceId) -> GatewayResult<()>;

    async fn pause(&self, device: &DeviceId) -> GatewayResult<()>;

    async fn skip_next(&self, device: &DeviceId) -> GatewayResult<()>;

    async fn skip_previous(&self, device: &DeviceId) -> GatewayResult<()>;

    async fn seek(&self, position_ms: u64, device: &DeviceId) -> GatewayResult<()>;

    async fn set_volume(&self, volume_percent: u8, device: &DeviceId) -> GatewayResult<()>;

    async fn set_shuffle(&self, shuffle: bool, device: &DeviceId) -> GatewayResult<()>;

    async fn set_repeat(&self, mode: RepeatMode, device: &DeviceId) -> GatewayResult<()>;

    /// Append to the device's own queue, independent of the controller's queue
    async fn enqueue(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()>;
}

/// Everything a player session needs from the outside world
pub trait PlayerGateway: SnapshotSource + DeviceRegistry + TrackCommandGateway {}

impl<T> PlayerGateway for T where T: SnapshotSource + DeviceRegistry + TrackCommandGateway {}
