//! Player operations (`/me/player/...`)
//!
//! Device-scoped commands accept an optional target device; without one the
//! Web API acts on the user's currently active device.

mod add_to_queue;
mod get_devices;
mod get_playback_state;
mod get_queue;
mod pause;
mod play;
mod recently_played;
mod seek;
mod set_repeat;
mod set_shuffle;
mod set_volume;
mod skip;
mod transfer_playback;

pub use add_to_queue::{AddToQueueOperation, AddToQueueRequest};
pub use get_devices::{GetDevicesOperation, GetDevicesRequest};
pub use get_playback_state::{GetPlaybackStateOperation, GetPlaybackStateRequest};
pub use get_queue::{GetQueueOperation, GetQueueRequest};
pub use pause::{PauseOperation, PauseRequest};
pub use play::{PlayTrackOperation, PlayTrackRequest, ResumeOperation, ResumeRequest};
pub use recently_played::{RecentlyPlayedOperation, RecentlyPlayedRequest};
pub use seek::{SeekOperation, SeekRequest};
pub use set_repeat::{SetRepeatOperation, SetRepeatRequest};
pub use set_shuffle::{SetShuffleOperation, SetShuffleRequest};
pub use set_volume::{SetVolumeOperation, SetVolumeRequest};
pub use skip::{SkipRequest, SkipToNextOperation, SkipToPreviousOperation};
pub use transfer_playback::{TransferPlaybackOperation, TransferPlaybackRequest};

use crate::operation::ValidationError;

/// Reject anything that is not a `spotify:` URI
pub(crate) fn validate_spotify_uri(parameter: &str, uri: &str) -> Result<(), ValidationError> {
    let mut parts = uri.splitn(3, ':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("spotify"), Some(kind), Some(id)) if !kind.is_empty() && !id.is_empty() => Ok(()),
        _ => Err(ValidationError::invalid_value(
            parameter,
            uri,
            "expected a spotify:<type>:<id> URI",
        )),
    }
}
