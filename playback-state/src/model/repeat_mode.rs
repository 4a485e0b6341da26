//! Repeat mode enumeration

use serde::{Deserialize, Serialize};

/// Repeat setting of the active device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    #[default]
    Off,
    /// Repeat the current context (album, playlist)
    Context,
    /// Repeat the current track
    Track,
}

impl RepeatMode {
    /// The next mode in the play bar's toggle order: off, context, track
    pub fn cycle(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::Context,
            RepeatMode::Context => RepeatMode::Track,
            RepeatMode::Track => RepeatMode::Off,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::Context => "context",
            RepeatMode::Track => "track",
        }
    }

    /// Parse a wire value; unknown values fall back to `Off`
    pub fn from_wire(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "context" => RepeatMode::Context,
            "track" => RepeatMode::Track,
            _ => RepeatMode::Off,
        }
    }
}
