//! Connectivity checks for a diagnostics page
//!
//! Each check runs independently so one failure does not hide the others.

use chrono::{DateTime, Utc};
use playback_state::{DeviceRegistry, SnapshotSource};
use serde::Serialize;
use spotify_api::TokenProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum CheckStatus {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticCheck {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub checked_at: DateTime<Utc>,
}

impl DiagnosticCheck {
    fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            checked_at: Utc::now(),
        }
    }
}

/// Run every check in order: token, devices, playback
pub async fn run<G>(token: &dyn TokenProvider, gateway: &G) -> Vec<DiagnosticCheck>
where
    G: SnapshotSource + DeviceRegistry + ?Sized,
{
    let mut checks = Vec::with_capacity(3);

    checks.push(match token.access_token().await {
        Ok(_) => DiagnosticCheck::new("Access token", CheckStatus::Success, "Access token available"),
        Err(e) => DiagnosticCheck::new("Access token", CheckStatus::Error, e.to_string()),
    });

    checks.push(match gateway.list_devices().await {
        Ok(devices) if devices.is_empty() => DiagnosticCheck::new(
            "Devices",
            CheckStatus::Warning,
            "No devices found. Open Spotify on a device to make it available.",
        ),
        Ok(devices) => {
            let active = devices.iter().find(|d| d.is_active);
            let message = match active {
                Some(device) => format!("{} device(s) found, active: {}", devices.len(), device.name),
                None => format!("{} device(s) found, none active", devices.len()),
            };
            let status = if active.is_some() {
                CheckStatus::Success
            } else {
                CheckStatus::Warning
            };
            DiagnosticCheck::new("Devices", status, message)
        }
        Err(e) => DiagnosticCheck::new("Devices", CheckStatus::Error, e.to_string()),
    });

    checks.push(match gateway.fetch_snapshot().await {
        Ok(Some(snapshot)) => {
            let track = snapshot
                .track
                .as_ref()
                .map(|t| format!("{} by {}", t.name, t.artist_line()))
                .unwrap_or_else(|| "unknown item".to_string());
            let state = if snapshot.is_playing { "Playing" } else { "Paused" };
            DiagnosticCheck::new("Playback", CheckStatus::Success, format!("{}: {}", state, track))
        }
        Ok(None) => DiagnosticCheck::new("Playback", CheckStatus::Warning, "Nothing is playing"),
        Err(e) => DiagnosticCheck::new("Playback", CheckStatus::Error, e.to_string()),
    });

    checks
}

/// Worst status across all checks
pub fn overall(checks: &[DiagnosticCheck]) -> CheckStatus {
    checks
        .iter()
        .map(|check| check.status)
        .max()
        .unwrap_or(CheckStatus::Success)
}
