//! Playback queue state for morning-sdk
//!
//! The core of the player: an in-memory queue of track URIs with a current
//! position, reconciled against externally polled playback snapshots.
//!
//! # Architecture
//!
//! ```text
//! user action ──► QueueController ──► TrackCommandGateway (play, pause, ...)
//!                   │    ▲
//!                   │    └── observe(snapshot) ◄── SnapshotSource (polled)
//!                   ▼
//!           DeviceSelection (opens when no device is active)
//! ```
//!
//! The controller is not shared; wrap it in a single owner (the session
//! actor in `morning-sdk`) and talk to it through that owner.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use playback_state::{QueueController, TrackUri, PlayOutcome};
//!
//! let mut controller = QueueController::new(Arc::new(spotify_client));
//! controller.refresh_devices().await;
//! controller.set_queue(vec![TrackUri::from_track_id("6rqhFgbbKwnb9MLmUQDhG6")], 0);
//!
//! match controller.play_from_queue(0).await? {
//!     PlayOutcome::Started { device, .. } => println!("playing on {}", device),
//!     PlayOutcome::DeviceSelectionRequired => println!("pick a device"),
//!     PlayOutcome::Ignored => {}
//! }
//! ```

pub mod advance;
pub mod controller;
pub mod device_selection;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod queue;
pub mod roster;
pub mod spotify;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use advance::{evaluate_advance, evaluate_advance_with_threshold, Advance, AdvanceGuard, ADVANCE_THRESHOLD_MS};
pub use controller::{CommandOutcome, PlayOutcome, QueueController, TransportAction};
pub use device_selection::{order_devices, DeviceSelection, SelectionState};
pub use error::{ControllerError, GatewayError, GatewayResult, Result};
pub use gateway::{DeviceRegistry, PlayerGateway, SnapshotSource, TrackCommandGateway};
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use model::{feed_queue, Device, DeviceId, DeviceKind, PlaybackSnapshot, Post, RepeatMode, TrackSummary, TrackUri};
pub use queue::PlayQueue;
pub use roster::DeviceRoster;
