//! Track catalogue operations (`/tracks/...`)

mod get_track;

pub use get_track::{GetTrackOperation, GetTrackRequest};
