//! Auto-advance decision
//!
//! Deciding whether a snapshot completes the current queue entry is a pure
//! function of the snapshot, the queue, the position and the guard, so it
//! can be tested without any I/O.

use crate::model::{PlaybackSnapshot, TrackUri};

/// Remaining time at or below which a playing track counts as finished
pub const ADVANCE_THRESHOLD_MS: u64 = 1000;

/// Remembers the track URI an auto-advance last fired from
///
/// Keyed by URI only. The URI is held until the next advance or a new queue,
/// so the held track will not auto-advance again: neither the second of two
/// consecutive copies in a queue nor a track replayed after stepping back
/// with `prev`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvanceGuard {
    last_fired: Option<TrackUri>,
}

impl AdvanceGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arm(&mut self, uri: TrackUri) {
        self.last_fired = Some(uri);
    }

    pub fn clear(&mut self) {
        self.last_fired = None;
    }

    pub fn last_fired(&self) -> Option<&TrackUri> {
        self.last_fired.as_ref()
    }

    /// Whether an advance from `uri` already fired
    pub fn blocks(&self, uri: &TrackUri) -> bool {
        self.last_fired.as_ref() == Some(uri)
    }
}

/// A decision to move past the queue entry at `from_position`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advance {
    pub from_position: usize,
    pub uri: TrackUri,
}

/// Decide with the default threshold
pub fn evaluate_advance(
    snapshot: &PlaybackSnapshot,
    queue: &[TrackUri],
    position: Option<usize>,
    guard: &AdvanceGuard,
) -> Option<Advance> {
    evaluate_advance_with_threshold(snapshot, queue, position, guard, ADVANCE_THRESHOLD_MS)
}

/// Fire when the snapshot shows `queue[position]` playing within
/// `threshold_ms` of its end and the guard has not seen this URI.
pub fn evaluate_advance_with_threshold(
    snapshot: &PlaybackSnapshot,
    queue: &[TrackUri],
    position: Option<usize>,
    guard: &AdvanceGuard,
    threshold_ms: u64,
) -> Option<Advance> {
    let position = position?;
    let expected = queue.get(position)?;
    let current = snapshot.current_track_uri.as_ref()?;

    if current != expected || !snapshot.is_playing {
        return None;
    }
    if snapshot.remaining_ms() > threshold_ms || guard.blocks(current) {
        return None;
    }

    Some(Advance {
        from_position: position,
        uri: current.clone(),
    })
}
