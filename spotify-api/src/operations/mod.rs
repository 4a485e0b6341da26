//! Spotify Web API operations organized by resource
//!
//! Each operation lives in its own file with its request type and tests.

pub mod player;
pub mod tracks;

pub use player::{
    AddToQueueOperation, GetDevicesOperation, GetPlaybackStateOperation, GetQueueOperation,
    PauseOperation, PlayTrackOperation, RecentlyPlayedOperation, ResumeOperation, SeekOperation,
    SetRepeatOperation, SetShuffleOperation, SetVolumeOperation, SkipToNextOperation,
    SkipToPreviousOperation, TransferPlaybackOperation,
};
pub use tracks::GetTrackOperation;
