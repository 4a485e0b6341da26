//! Blog posts as the player sees them

use serde::{Deserialize, Serialize};

use super::TrackUri;

/// A post tied to a single track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    /// Bare Spotify track id
    pub track_id: String,
}

impl Post {
    pub fn new(content: impl Into<String>, track_id: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            track_id: track_id.into(),
        }
    }

    pub fn track_uri(&self) -> TrackUri {
        TrackUri::from_track_id(&self.track_id)
    }
}

/// The play queue for a feed: one URI per post, in feed order
pub fn feed_queue(posts: &[Post]) -> Vec<TrackUri> {
    posts.iter().map(Post::track_uri).collect()
}
