//! Ordered play queue with a current position

use crate::model::TrackUri;

/// The user-facing list of tracks for continuous playback
///
/// Invariant: when the position is `Some(p)`, `p < len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayQueue {
    tracks: Vec<TrackUri>,
    position: Option<usize>,
}

impl PlayQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracks and position together
    ///
    /// The start index is clamped into range; an empty queue has no position.
    pub fn replace(&mut self, tracks: Vec<TrackUri>, start_index: usize) {
        self.position = clamp_index(start_index, tracks.len());
        self.tracks = tracks;
    }

    /// Move to `index` (clamped) and return the track there
    pub fn select(&mut self, index: usize) -> Option<(usize, &TrackUri)> {
        let clamped = clamp_index(index, self.tracks.len())?;
        self.position = Some(clamped);
        self.tracks.get(clamped).map(|uri| (clamped, uri))
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn current(&self) -> Option<&TrackUri> {
        self.position.and_then(|p| self.tracks.get(p))
    }

    /// Index after the current one, if it exists; no wraparound
    pub fn next_index(&self) -> Option<usize> {
        self.position
            .map(|p| p + 1)
            .filter(|next| *next < self.tracks.len())
    }

    /// Index before the current one, if it exists
    pub fn prev_index(&self) -> Option<usize> {
        self.position.and_then(|p| p.checked_sub(1))
    }

    pub fn tracks(&self) -> &[TrackUri] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

fn clamp_index(index: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(ids: &[&str]) -> Vec<TrackUri> {
        ids.iter().map(|id| TrackUri::from_track_id(id)).collect()
    }

    #[test]
    fn test_replace_clamps_start() {
        let mut queue = PlayQueue::new();
        queue.replace(uris(&["a", "b", "c"]), 7);
        assert_eq!(queue.position(), Some(2));

        queue.replace(uris(&["a", "b", "c"]), 1);
        assert_eq!(queue.current(), Some(&TrackUri::from_track_id("b")));
    }

    #[test]
    fn test_replace_with_empty_unsets_position() {
        let mut queue = PlayQueue::new();
        queue.replace(uris(&["a"]), 0);
        queue.replace(Vec::new(), 3);
        assert_eq!(queue.position(), None);
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_select() {
        let mut queue = PlayQueue::new();
        assert!(queue.select(0).is_none());

        queue.replace(uris(&["a", "b"]), 0);
        let (index, uri) = queue.select(9).unwrap();
        assert_eq!(index, 1);
        assert_eq!(uri, &TrackUri::from_track_id("b"));
        assert_eq!(queue.position(), Some(1));
    }

    #[test]
    fn test_neighbours() {
        let mut queue = PlayQueue::new();
        assert_eq!(queue.next_index(), None);
        assert_eq!(queue.prev_index(), None);

        queue.replace(uris(&["a", "b", "c"]), 0);
        assert_eq!(queue.next_index(), Some(1));
        assert_eq!(queue.prev_index(), None);

        queue.select(2);
        assert_eq!(queue.next_index(), None);
        assert_eq!(queue.prev_index(), Some(1));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn replace_clamps_into_range(len in 0usize..40, start in 0usize..100) {
                let tracks: Vec<TrackUri> = (0..len).map(|i| TrackUri::from_track_id(&format!("t{i}"))).collect();
                let mut queue = PlayQueue::new();
                queue.replace(tracks, start);

                if len == 0 {
                    prop_assert_eq!(queue.position(), None);
                } else {
                    prop_assert_eq!(queue.position(), Some(start.min(len - 1)));
                }
            }

            #[test]
            fn position_stays_in_bounds(len in 1usize..20, steps in proptest::collection::vec(0u8..3, 0..50)) {
                let tracks: Vec<TrackUri> = (0..len).map(|i| TrackUri::from_track_id(&format!("t{i}"))).collect();
                let mut queue = PlayQueue::new();
                queue.replace(tracks, 0);

                for step in steps {
                    let target = match step {
                        0 => queue.next_index(),
                        1 => queue.prev_index(),
                        _ => Some(len * 2),
                    };
                    if let Some(index) = target {
                        queue.select(index);
                    }
                    let position = queue.position();
                    prop_assert!(position.is_some_and(|p| p < len));
                }
            }
        }
    }
}
