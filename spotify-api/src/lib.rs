//! High-level Spotify Web API for playback control
//!
//! This crate provides a type-safe, trait-based API for the Spotify player
//! endpoints. It uses the private `web-client` crate for HTTP communication.
//!
//! Every endpoint is a [`SpotifyOperation`] with a typed request and
//! response. [`SpotifyClient`] executes operations and offers convenience
//! methods for the common player commands:
//!
//! ```rust,ignore
//! use spotify_api::{SpotifyClient, StaticToken};
//!
//! let client = SpotifyClient::new(StaticToken::shared("BQD..."))?;
//! for device in client.devices().await? {
//!     println!("{} ({})", device.name, device.device_type);
//! }
//! client.play_track("spotify:track:6rqhFgbbKwnb9MLmUQDhG6", Some("a1b2c3")).await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod operation;
pub mod operations;
pub mod token;

pub use client::SpotifyClient;
pub use error::{ApiError, Result};
pub use models::{
    AlbumObject, ArtistObject, DeviceObject, ImageObject, PlayHistoryObject, PlaybackStateObject,
    QueueObject, RecentlyPlayedObject, RepeatState, TrackObject,
};
pub use operation::{SpotifyOperation, ValidationError};
pub use token::{StaticToken, TokenProvider};
pub use web_client::{WebClient, WebClientConfig, DEFAULT_BASE_URL};
