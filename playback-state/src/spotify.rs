//! Spotify Web API implementation of the collaborator traits

use async_trait::async_trait;
use spotify_api::{DeviceObject, PlaybackStateObject, RepeatState, SpotifyClient, TrackObject};
use tracing::debug;

use crate::error::GatewayResult;
use crate::gateway::{DeviceRegistry, SnapshotSource, TrackCommandGateway};
use crate::model::{Device, DeviceId, PlaybackSnapshot, RepeatMode, TrackSummary, TrackUri};

impl From<RepeatState> for RepeatMode {
    fn from(state: RepeatState) -> Self {
        match state {
            RepeatState::Off => RepeatMode::Off,
            RepeatState::Context => RepeatMode::Context,
            RepeatState::Track => RepeatMode::Track,
        }
    }
}

impl From<RepeatMode> for RepeatState {
    fn from(mode: RepeatMode) -> Self {
        match mode {
            RepeatMode::Off => RepeatState::Off,
            RepeatMode::Context => RepeatState::Context,
            RepeatMode::Track => RepeatState::Track,
        }
    }
}

impl From<&TrackObject> for TrackSummary {
    fn from(track: &TrackObject) -> Self {
        Self {
            name: track.name.clone(),
            artists: track.artists.iter().map(|artist| artist.name.clone()).collect(),
            album: track.album.as_ref().map(|album| album.name.clone()),
            artwork_url: track.artwork_url().map(str::to_string),
        }
    }
}

impl From<PlaybackStateObject> for PlaybackSnapshot {
    fn from(state: PlaybackStateObject) -> Self {
        let item = state.item.as_ref();
        Self {
            current_track_uri: item.map(|track| TrackUri::new(track.uri.clone())),
            is_playing: state.is_playing,
            progress_ms: state.progress_ms.unwrap_or(0),
            duration_ms: item.map(|track| track.duration_ms).unwrap_or(0),
            active_device_id: state
                .device
                .as_ref()
                .and_then(|device| device.id.clone())
                .map(DeviceId::new),
            track: item.map(TrackSummary::from),
            shuffle: state.shuffle_state,
            repeat: state.repeat_state.into(),
            volume_percent: state.device.as_ref().and_then(|device| device.volume_percent),
        }
    }
}

/// Convert a registry entry; devices without an id cannot be addressed
pub fn device_from_object(object: DeviceObject) -> Option<Device> {
    let id = object.id?;
    Some(Device {
        id: DeviceId::new(id),
        name: object.name,
        device_type: object.device_type,
        is_active: object.is_active,
        volume_percent: object.volume_percent,
    })
}

#[async_trait]
impl SnapshotSource for SpotifyClient {
    async fn fetch_snapshot(&self) -> GatewayResult<Option<PlaybackSnapshot>> {
        Ok(self.current_playback().await?.map(PlaybackSnapshot::from))
    }
}

#[async_trait]
impl DeviceRegistry for SpotifyClient {
    async fn list_devices(&self) -> GatewayResult<Vec<Device>> {
        let objects = self.devices().await?;
        let total = objects.len();
        let devices: Vec<Device> = objects.into_iter().filter_map(device_from_object).collect();
        if devices.len() < total {
            debug!(skipped = total - devices.len(), "skipped devices without an id");
        }
        Ok(devices)
    }

    async fn transfer_playback(&self, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::transfer_playback(self, device.as_str(), false).await?)
    }
}

#[async_trait]
impl TrackCommandGateway for SpotifyClient {
    async fn play_track(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::play_track(self, uri.as_str(), Some(device.as_str())).await?)
    }

    async fn resume(&self, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::resume(self, Some(device.as_str())).await?)
    }

    async fn pause(&self, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::pause(self, Some(device.as_str())).await?)
    }

    async fn skip_next(&self, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::skip_next(self, Some(device.as_str())).await?)
    }

    async fn skip_previous(&self, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::skip_previous(self, Some(device.as_str())).await?)
    }

    async fn seek(&self, position_ms: u64, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::seek(self, position_ms, Some(device.as_str())).await?)
    }

    async fn set_volume(&self, volume_percent: u8, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::set_volume(self, volume_percent, Some(device.as_str())).await?)
    }

    async fn set_shuffle(&self, shuffle: bool, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::set_shuffle(self, shuffle, Some(device.as_str())).await?)
    }

    async fn set_repeat(&self, mode: RepeatMode, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::set_repeat(self, mode.into(), Some(device.as_str())).await?)
    }

    async fn enqueue(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()> {
        Ok(SpotifyClient::add_to_queue(self, uri.as_str(), Some(device.as_str())).await?)
    }
}
