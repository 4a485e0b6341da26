//! Model types for playback-state

mod device;
mod ids;
mod post;
mod repeat_mode;
mod snapshot;

pub use device::{Device, DeviceKind};
pub use ids::{DeviceId, TrackUri};
pub use post::{feed_queue, Post};
pub use repeat_mode::RepeatMode;
pub use snapshot::{PlaybackSnapshot, TrackSummary};
