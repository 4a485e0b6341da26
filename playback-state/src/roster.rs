//! Cached device list

use tracing::{debug, warn};

use crate::device_selection::order_devices;
use crate::gateway::DeviceRegistry;
use crate::model::{Device, DeviceId};

/// The last device list fetched from the registry
#[derive(Debug, Clone, Default)]
pub struct DeviceRoster {
    devices: Vec<Device>,
    loaded: bool,
}

impl DeviceRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refetch from the registry
    ///
    /// A failed list call is logged and leaves the roster empty.
    pub async fn refresh<R>(&mut self, registry: &R) -> &[Device]
    where
        R: DeviceRegistry + ?Sized,
    {
        let devices = match registry.list_devices().await {
            Ok(devices) => devices,
            Err(e) => {
                warn!(error = %e, "device list unavailable");
                Vec::new()
            }
        };
        self.replace(devices);
        &self.devices
    }

    pub fn replace(&mut self, devices: Vec<Device>) {
        debug!(count = devices.len(), "device roster updated");
        self.devices = devices;
        self.loaded = true;
    }

    /// Whether a device list has been installed, even an empty one
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// First device flagged active, in registry order
    pub fn active(&self) -> Option<&Device> {
        self.devices.iter().find(|device| device.is_active)
    }

    pub fn get(&self, id: &DeviceId) -> Option<&Device> {
        self.devices.iter().find(|device| &device.id == id)
    }

    /// Devices in presentation order
    pub fn ordered(&self) -> Vec<Device> {
        order_devices(&self.devices)
    }
}
