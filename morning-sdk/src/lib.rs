//! Player session for a Spotify-backed music blog
//!
//! Readers browse posts, each tied to a track, and control playback on their
//! own Spotify devices. A [`PlayerSession`] keeps a queue built from the
//! feed, polls playback state, advances to the next queued track when one
//! finishes, and asks the reader to pick a device when none is active.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use morning_sdk::{connect, Post, PlayOutcome, SessionConfig, StaticToken};
//!
//! let player = connect(StaticToken::shared(access_token), SessionConfig::default())?;
//!
//! player.load_feed(&[
//!     Post::new("A quiet start", "6rqhFgbbKwnb9MLmUQDhG6"),
//!     Post::new("Then the rain", "4iV5W9uYEdYUVa79Axb7Rh"),
//! ]).await?;
//!
//! match player.play_from_queue(0).await? {
//!     PlayOutcome::DeviceSelectionRequired => {
//!         let devices = player.view().devices;
//!         player.pick_device(devices[0].id.clone()).await?;
//!     }
//!     _ => {}
//! }
//!
//! let mut updates = player.watch();
//! while updates.changed().await.is_ok() {
//!     let view = updates.borrow().clone();
//!     println!("{} {}", view.track_name().unwrap_or("-"), view.progress_label());
//! }
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod poller;
pub mod session;
pub mod view;

use std::sync::Arc;

pub use config::SessionConfig;
pub use diagnostics::{CheckStatus, DiagnosticCheck};
pub use error::{Result, SdkError};
pub use poller::{PollEvent, PollStats, SnapshotPoller};
pub use session::{PlayerHandle, PlayerSession, SessionId};
pub use view::{format_time, PlayerView};

pub use playback_state::{
    logging, CommandOutcome, Device, DeviceId, DeviceKind, PlayOutcome, PlaybackSnapshot, Post,
    RepeatMode, SelectionState, TrackUri, TransportAction,
};
pub use spotify_api::{SpotifyClient, StaticToken, TokenProvider};

/// Start a session against the Spotify Web API
pub fn connect(token: Arc<dyn TokenProvider>, config: SessionConfig) -> Result<PlayerHandle> {
    config.validate()?;
    let client = SpotifyClient::with_config(config.web_client_config(), token)?;
    PlayerSession::spawn(Arc::new(client), config)
}
