//! Playback device

use serde::{Deserialize, Serialize};

use super::DeviceId;

/// Broad device category, used for icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceKind {
    Computer,
    Smartphone,
    Speaker,
}

impl DeviceKind {
    /// Classify a Web API device type string such as `"Computer"`
    pub fn from_type_str(device_type: &str) -> Self {
        let lowered = device_type.to_lowercase();
        if lowered.contains("computer") {
            DeviceKind::Computer
        } else if lowered.contains("smartphone") || lowered.contains("phone") {
            DeviceKind::Smartphone
        } else {
            DeviceKind::Speaker
        }
    }
}

/// A device that can receive playback commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    /// Raw type string as reported by the registry
    pub device_type: String,
    pub is_active: bool,
    pub volume_percent: Option<u8>,
}

impl Device {
    pub fn new(id: impl Into<DeviceId>, name: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            device_type: device_type.into(),
            is_active: false,
            volume_percent: None,
        }
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn with_volume(mut self, volume_percent: u8) -> Self {
        self.volume_percent = Some(volume_percent);
        self
    }

    pub fn kind(&self) -> DeviceKind {
        DeviceKind::from_type_str(&self.device_type)
    }

    /// The player embedded in the user's browser
    pub fn is_web_player(&self) -> bool {
        self.name.to_lowercase().contains("web player")
    }
}
