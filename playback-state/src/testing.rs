//! In-memory collaborators for tests
//!
//! [`MockGateway`] implements every collaborator trait, records each call
//! and can be told to fail. Transfers mark the target device active, the
//! way the real registry reports it afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::{DeviceRegistry, SnapshotSource, TrackCommandGateway};
use crate::model::{Device, DeviceId, PlaybackSnapshot, RepeatMode, TrackUri};

/// A recorded collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    FetchSnapshot,
    ListDevices,
    Transfer(DeviceId),
    Play { uri: TrackUri, device: DeviceId },
    Resume(DeviceId),
    Pause(DeviceId),
    SkipNext(DeviceId),
    SkipPrevious(DeviceId),
    Seek { position_ms: u64, device: DeviceId },
    SetVolume { percent: u8, device: DeviceId },
    SetShuffle { shuffle: bool, device: DeviceId },
    SetRepeat { mode: RepeatMode, device: DeviceId },
    Enqueue { uri: TrackUri, device: DeviceId },
}

#[derive(Debug, Default)]
struct MockState {
    devices: Vec<Device>,
    snapshot: Option<PlaybackSnapshot>,
    calls: Vec<GatewayCall>,
}

#[derive(Debug, Default)]
pub struct MockGateway {
    state: Mutex<MockState>,
    fail_commands: AtomicBool,
    fail_transfer: AtomicBool,
    fail_devices: AtomicBool,
    fail_snapshot: AtomicBool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_devices(devices: Vec<Device>) -> Self {
        let gateway = Self::new();
        gateway.set_devices(devices);
        gateway
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_devices(&self, devices: Vec<Device>) {
        self.lock().devices = devices;
    }

    pub fn set_snapshot(&self, snapshot: Option<PlaybackSnapshot>) {
        self.lock().snapshot = snapshot;
    }

    pub fn fail_commands(&self, fail: bool) {
        self.fail_commands.store(fail, Ordering::SeqCst);
    }

    pub fn fail_transfer(&self, fail: bool) {
        self.fail_transfer.store(fail, Ordering::SeqCst);
    }

    pub fn fail_devices(&self, fail: bool) {
        self.fail_devices.store(fail, Ordering::SeqCst);
    }

    pub fn fail_snapshot(&self, fail: bool) {
        self.fail_snapshot.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock().calls.clone()
    }

    /// URIs of every play command, in order
    pub fn played(&self) -> Vec<TrackUri> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                GatewayCall::Play { uri, .. } => Some(uri.clone()),
                _ => None,
            })
            .collect()
    }

    /// Calls other than polling reads
    pub fn commands(&self) -> Vec<GatewayCall> {
        self.lock()
            .calls
            .iter()
            .filter(|call| !matches!(call, GatewayCall::FetchSnapshot | GatewayCall::ListDevices))
            .cloned()
            .collect()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn record(&self, call: GatewayCall) {
        self.lock().calls.push(call);
    }

    fn command(&self, call: GatewayCall) -> GatewayResult<()> {
        self.record(call);
        if self.fail_commands.load(Ordering::SeqCst) {
            return Err(GatewayError::Upstream("command failed".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl SnapshotSource for MockGateway {
    async fn fetch_snapshot(&self) -> GatewayResult<Option<PlaybackSnapshot>> {
        self.record(GatewayCall::FetchSnapshot);
        if self.fail_snapshot.load(Ordering::SeqCst) {
            return Err(GatewayError::Upstream("playback state unavailable".to_string()));
        }
        Ok(self.lock().snapshot.clone())
    }
}

#[async_trait]
impl DeviceRegistry for MockGateway {
    async fn list_devices(&self) -> GatewayResult<Vec<Device>> {
        self.record(GatewayCall::ListDevices);
        if self.fail_devices.load(Ordering::SeqCst) {
            return Err(GatewayError::Upstream("device list unavailable".to_string()));
        }
        Ok(self.lock().devices.clone())
    }

    async fn transfer_playback(&self, device: &DeviceId) -> GatewayResult<()> {
        self.record(GatewayCall::Transfer(device.clone()));
        if self.fail_transfer.load(Ordering::SeqCst) {
            return Err(GatewayError::Upstream("transfer failed".to_string()));
        }
        for entry in self.lock().devices.iter_mut() {
            entry.is_active = &entry.id == device;
        }
        Ok(())
    }
}

#[async_trait]
impl TrackCommandGateway for MockGateway {
    async fn play_track(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::Play {
            uri: uri.clone(),
            device: device.clone(),
        })
    }

    async fn resume(&self, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::Resume(device.clone()))
    }

    async fn pause(&self, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::Pause(device.clone()))
    }

    async fn skip_next(&self, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::SkipNext(device.clone()))
    }

    async fn skip_previous(&self, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::SkipPrevious(device.clone()))
    }

    async fn seek(&self, position_ms: u64, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::Seek {
            position_ms,
            device: device.clone(),
        })
    }

    async fn set_volume(&self, percent: u8, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::SetVolume {
            percent,
            device: device.clone(),
        })
    }

    async fn set_shuffle(&self, shuffle: bool, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::SetShuffle {
            shuffle,
            device: device.clone(),
        })
    }

    async fn set_repeat(&self, mode: RepeatMode, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::SetRepeat {
            mode,
            device: device.clone(),
        })
    }

    async fn enqueue(&self, uri: &TrackUri, device: &DeviceId) -> GatewayResult<()> {
        self.command(GatewayCall::Enqueue {
            uri: uri.clone(),
            device: device.clone(),
        })
    }
}
