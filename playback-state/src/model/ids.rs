//! Identity types for tracks and devices

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate common ID type implementations
macro_rules! impl_id_type {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

const TRACK_URI_PREFIX: &str = "spotify:track:";

/// A Spotify track URI such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`
///
/// Compared by exact string equality; the same track may appear several
/// times in a queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackUri(String);

impl TrackUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Build a URI from a bare track id; full URIs are passed through
    pub fn from_track_id(id: &str) -> Self {
        let id = id.trim();
        if id.starts_with(TRACK_URI_PREFIX) {
            Self(id.to_string())
        } else {
            Self(format!("{}{}", TRACK_URI_PREFIX, id))
        }
    }

    /// The bare id, if this is a track URI
    pub fn track_id(&self) -> Option<&str> {
        self.0
            .strip_prefix(TRACK_URI_PREFIX)
            .filter(|id| !id.is_empty())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_id_type!(TrackUri);

/// Identifier of a playback device
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_id_type!(DeviceId);
