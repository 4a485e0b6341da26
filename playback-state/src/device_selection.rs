//! Device-selection coordinator
//!
//! A two-state modal flow. It opens when a play command finds no active
//! device and closes once the user picks a device (after playback has been
//! transferred) or dismisses it. Picking never replays the track that
//! triggered the prompt.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::GatewayResult;
use crate::gateway::DeviceRegistry;
use crate::model::{Device, DeviceId};
use crate::roster::DeviceRoster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct DeviceSelection {
    state: SelectionState,
}

impl DeviceSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SelectionState::Open
    }

    pub fn open(&mut self) {
        if !self.is_open() {
            info!("device selection opened");
        }
        self.state = SelectionState::Open;
    }

    pub fn dismiss(&mut self) {
        self.state = SelectionState::Closed;
    }

    /// Transfer playback to `device`, refetch the roster, then close
    ///
    /// On a failed transfer the state is left unchanged and the error is
    /// returned, so an open prompt stays open.
    pub async fn pick<R>(
        &mut self,
        registry: &R,
        roster: &mut DeviceRoster,
        device: &DeviceId,
    ) -> GatewayResult<()>
    where
        R: DeviceRegistry + ?Sized,
    {
        if let Err(e) = registry.transfer_playback(device).await {
            warn!(device = %device, error = %e, "transfer playback failed");
            return Err(e);
        }

        roster.refresh(registry).await;
        self.state = SelectionState::Closed;
        info!(device = %device, "playback transferred");
        Ok(())
    }
}

fn presentation_rank(device: &Device) -> u8 {
    if device.is_web_player() {
        0
    } else if device.is_active {
        1
    } else {
        2
    }
}

/// Order devices for presentation
///
/// Browser-embedded web players first, then the active device, then the
/// rest in registry order.
pub fn order_devices(devices: &[Device]) -> Vec<Device> {
    let mut ordered = devices.to_vec();
    ordered.sort_by_key(presentation_rank);
    ordered
}
