//! Queue controller
//!
//! Owns the play queue, the advance guard, the device roster and the
//! device-selection state for one user session. Commands go out through the
//! collaborator traits; snapshots come in through [`QueueController::observe`].
//!
//! Play and transport commands are gated on an active device. Without one
//! no command is sent and device selection opens instead; the attempted
//! play is not remembered.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::advance::{evaluate_advance_with_threshold, AdvanceGuard, ADVANCE_THRESHOLD_MS};
use crate::device_selection::{DeviceSelection, SelectionState};
use crate::error::{ControllerError, Result};
use crate::gateway::PlayerGateway;
use crate::model::{Device, DeviceId, PlaybackSnapshot, RepeatMode, TrackUri};
use crate::queue::PlayQueue;
use crate::roster::DeviceRoster;

/// Result of a play request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// Exactly one play command was sent
    Started { uri: TrackUri, device: DeviceId },
    /// Nothing to do (empty queue, no neighbour in that direction)
    Ignored,
    /// No active device; nothing was sent and device selection is open
    DeviceSelectionRequired,
}

/// Result of a transport command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Sent { device: DeviceId },
    DeviceSelectionRequired,
}

/// Play bar commands that act on the active device as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportAction {
    Pause,
    Resume,
    SkipNext,
    SkipPrevious,
    Seek(u64),
    SetVolume(u8),
    SetShuffle(bool),
    SetRepeat(RepeatMode),
    Enqueue(TrackUri),
}

pub struct QueueController<G: ?Sized> {
    gateway: Arc<G>,
    queue: PlayQueue,
    guard: AdvanceGuard,
    roster: DeviceRoster,
    selection: DeviceSelection,
    snapshot: Option<PlaybackSnapshot>,
    advance_threshold_ms: u64,
}

impl<G> QueueController<G>
where
    G: PlayerGateway + ?Sized,
{
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            queue: PlayQueue::new(),
            guard: AdvanceGuard::new(),
            roster: DeviceRoster::new(),
            selection: DeviceSelection::new(),
            snapshot: None,
            advance_threshold_ms: ADVANCE_THRESHOLD_MS,
        }
    }

    pub fn with_advance_threshold(mut self, threshold_ms: u64) -> Self {
        self.advance_threshold_ms = threshold_ms;
        self
    }

    // Queue

    /// Replace queue and position; sends nothing and clears the advance guard
    pub fn set_queue(&mut self, tracks: Vec<TrackUri>, start_index: usize) {
        self.queue.replace(tracks, start_index);
        self.guard.clear();
        info!(
            len = self.queue.len(),
            position = ?self.queue.position(),
            "queue replaced"
        );
    }

    /// Move to `index` (clamped) and play it on the active device
    ///
    /// The position moves even if the play command then fails.
    pub async fn play_from_queue(&mut self, index: usize) -> Result<PlayOutcome> {
        let Some((position, uri)) = self.queue.select(index) else {
            debug!(index, "play_from_queue on empty queue ignored");
            return Ok(PlayOutcome::Ignored);
        };
        let uri = uri.clone();
        debug!(position, uri = %uri, "playing from queue");
        self.send_play(uri).await
    }

    pub async fn next(&mut self) -> Result<PlayOutcome> {
        match self.queue.next_index() {
            Some(index) => self.play_from_queue(index).await,
            None => Ok(PlayOutcome::Ignored),
        }
    }

    pub async fn prev(&mut self) -> Result<PlayOutcome> {
        match self.queue.prev_index() {
            Some(index) => self.play_from_queue(index).await,
            None => Ok(PlayOutcome::Ignored),
        }
    }

    /// Play a single track without touching the queue
    pub async fn play_track(&mut self, uri: TrackUri) -> Result<PlayOutcome> {
        self.send_play(uri).await
    }

    async fn send_play(&mut self, uri: TrackUri) -> Result<PlayOutcome> {
        let Some(device) = self.require_device() else {
            return Ok(PlayOutcome::DeviceSelectionRequired);
        };

        self.gateway.play_track(&uri, &device).await?;
        Ok(PlayOutcome::Started { uri, device })
    }

    // Snapshots

    /// Record a polled snapshot and auto-advance if it completes the current entry
    ///
    /// The guard is armed before the advance is attempted, so a failing play
    /// is not retried on the next snapshot.
    pub async fn observe(&mut self, snapshot: Option<PlaybackSnapshot>) -> Result<Option<PlayOutcome>> {
        self.snapshot = snapshot;

        let advance = match &self.snapshot {
            Some(snapshot) => evaluate_advance_with_threshold(
                snapshot,
                self.queue.tracks(),
                self.queue.position(),
                &self.guard,
                self.advance_threshold_ms,
            ),
            None => None,
        };

        let Some(advance) = advance else {
            return Ok(None);
        };

        info!(from = advance.from_position, uri = %advance.uri, "track finished, advancing");
        self.guard.arm(advance.uri);
        self.next().await.map(Some)
    }

    // Transport

    pub async fn transport(&mut self, action: TransportAction) -> Result<CommandOutcome> {
        if let TransportAction::SetVolume(percent) = &action {
            if *percent > 100 {
                return Err(ControllerError::InvalidArgument(format!(
                    "volume {} is outside 0..=100",
                    percent
                )));
            }
        }

        let Some(device) = self.require_device() else {
            return Ok(CommandOutcome::DeviceSelectionRequired);
        };

        debug!(?action, device = %device, "transport command");
        let gateway = &self.gateway;
        match &action {
            TransportAction::Pause => gateway.pause(&device).await,
            TransportAction::Resume => gateway.resume(&device).await,
            TransportAction::SkipNext => gateway.skip_next(&device).await,
            TransportAction::SkipPrevious => gateway.skip_previous(&device).await,
            TransportAction::Seek(position_ms) => gateway.seek(*position_ms, &device).await,
            TransportAction::SetVolume(percent) => gateway.set_volume(*percent, &device).await,
            TransportAction::SetShuffle(shuffle) => gateway.set_shuffle(*shuffle, &device).await,
            TransportAction::SetRepeat(mode) => gateway.set_repeat(*mode, &device).await,
            TransportAction::Enqueue(uri) => gateway.enqueue(uri, &device).await,
        }?;

        Ok(CommandOutcome::Sent { device })
    }

    // Devices

    /// Refetch devices; failures leave an empty roster
    pub async fn refresh_devices(&mut self) -> &[Device] {
        self.roster.refresh(self.gateway.as_ref()).await
    }

    /// Install a device list fetched elsewhere (the poller)
    pub fn update_devices(&mut self, devices: Vec<Device>) {
        self.roster.replace(devices);
    }

    pub fn open_device_selection(&mut self) {
        self.selection.open();
    }

    pub fn dismiss_device_selection(&mut self) {
        self.selection.dismiss();
    }

    /// Transfer playback to `device` and close device selection
    pub async fn pick_device(&mut self, device: &DeviceId) -> Result<()> {
        self.selection
            .pick(self.gateway.as_ref(), &mut self.roster, device)
            .await
            .map_err(ControllerError::from)
    }

    /// Device that commands go to
    ///
    /// The first active device in the roster. Until a device list has been
    /// fetched at all, the latest snapshot's device stands in.
    pub fn active_device_id(&self) -> Option<DeviceId> {
        if self.roster.is_loaded() {
            return self.roster.active().map(|device| device.id.clone());
        }
        self.snapshot
            .as_ref()
            .and_then(|snapshot| snapshot.active_device_id.clone())
    }

    fn require_device(&mut self) -> Option<DeviceId> {
        let device = self.active_device_id();
        if device.is_none() {
            warn!("no active device, opening device selection");
            self.selection.open();
        }
        device
    }

    // Accessors

    pub fn queue(&self) -> &[TrackUri] {
        self.queue.tracks()
    }

    pub fn position(&self) -> Option<usize> {
        self.queue.position()
    }

    pub fn current_queue_track(&self) -> Option<&TrackUri> {
        self.queue.current()
    }

    pub fn snapshot(&self) -> Option<&PlaybackSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn guard(&self) -> &AdvanceGuard {
        &self.guard
    }

    pub fn devices(&self) -> &[Device] {
        self.roster.devices()
    }

    pub fn ordered_devices(&self) -> Vec<Device> {
        self.roster.ordered()
    }

    pub fn active_device(&self) -> Option<&Device> {
        self.roster.active()
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }
}

impl<G: ?Sized> std::fmt::Debug for QueueController<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueController")
            .field("queue", &self.queue)
            .field("guard", &self.guard)
            .field("selection", &self.selection)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{GatewayCall, MockGateway};

    fn uris(ids: &[&str]) -> Vec<TrackUri> {
        ids.iter().map(|id| TrackUri::from_track_id(id)).collect()
    }

    fn controller_with_active_device() -> (Arc<MockGateway>, QueueController<MockGateway>) {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller.update_devices(vec![Device::new("dev-1", "Laptop", "Computer").active()]);
        (gateway, controller)
    }

    #[tokio::test]
    async fn test_set_queue_sends_nothing() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 1);
        assert_eq!(controller.position(), Some(1));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_set_queue_clears_guard() {
        let (_gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);
        controller
            .observe(Some(PlaybackSnapshot::of_track(TrackUri::from_track_id("a"), true, 9_500, 10_000)))
            .await
            .unwrap();
        assert!(controller.guard().last_fired().is_some());

        controller.set_queue(uris(&["c"]), 0);
        assert!(controller.guard().last_fired().is_none());
    }

    #[tokio::test]
    async fn test_transport_validates_volume_before_device_check() {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));
        let result = controller.transport(TransportAction::SetVolume(101)).await;
        assert!(matches!(result, Err(ControllerError::InvalidArgument(_))));
        assert_eq!(controller.selection_state(), SelectionState::Closed);
    }

    #[tokio::test]
    async fn test_snapshot_device_is_fallback() {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller
            .observe(Some(PlaybackSnapshot::of_track(TrackUri::from_track_id("x"), false, 0, 1).on_device("phone")))
            .await
            .unwrap();

        let outcome = controller.transport(TransportAction::Pause).await.unwrap();
        assert_eq!(outcome, CommandOutcome::Sent { device: DeviceId::new("phone") });
        assert_eq!(gateway.calls(), vec![GatewayCall::Pause(DeviceId::new("phone"))]);
    }

    #[tokio::test]
    async fn test_fetched_device_list_overrides_snapshot_device() {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller.set_queue(uris(&["a", "b", "c"]), 0);
        controller
            .observe(Some(PlaybackSnapshot::of_track(TrackUri::from_track_id("x"), false, 0, 1).on_device("phone")))
            .await
            .unwrap();
        controller.update_devices(vec![Device::new("spk", "Office Speaker", "Speaker")]);

        let outcome = controller.play_from_queue(1).await.unwrap();
        assert_eq!(outcome, PlayOutcome::DeviceSelectionRequired);
        assert_eq!(controller.selection_state(), SelectionState::Open);
        assert_eq!(controller.active_device_id(), None);
        assert!(gateway.played().is_empty());
    }

    #[tokio::test]
    async fn test_replayed_track_is_still_guarded() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        controller.observe(near_end("a")).await.unwrap();
        assert_eq!(controller.position(), Some(1));
        controller.prev().await.unwrap();
        assert_eq!(controller.position(), Some(0));

        controller.observe(started("a")).await.unwrap();
        let outcome = controller.observe(near_end("a")).await.unwrap();
        // the guard still holds the URI advanced from earlier
        assert_eq!(outcome, None);
        assert_eq!(controller.position(), Some(0));
        assert_eq!(gateway.played(), uris(&["b", "a"]));
    }

    fn near_end(id: &str) -> Option<PlaybackSnapshot> {
        Some(PlaybackSnapshot::of_track(TrackUri::from_track_id(id), true, 179_400, 180_000).on_device("dev-1"))
    }

    fn started(id: &str) -> Option<PlaybackSnapshot> {
        Some(PlaybackSnapshot::of_track(TrackUri::from_track_id(id), true, 0, 180_000).on_device("dev-1"))
    }

    #[tokio::test]
    async fn test_next_plays_following_track() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        let outcome = controller.next().await.unwrap();
        assert_eq!(
            outcome,
            PlayOutcome::Started {
                uri: TrackUri::from_track_id("b"),
                device: DeviceId::new("dev-1"),
            }
        );
        assert_eq!(controller.position(), Some(1));
        assert_eq!(gateway.played(), uris(&["b"]));
    }

    #[tokio::test]
    async fn test_next_at_last_index_is_noop() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 2);

        assert_eq!(controller.next().await.unwrap(), PlayOutcome::Ignored);
        assert_eq!(controller.position(), Some(2));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_prev_at_first_index_is_noop() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);

        assert_eq!(controller.prev().await.unwrap(), PlayOutcome::Ignored);
        assert_eq!(controller.position(), Some(0));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_prev_plays_previous_track() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 1);

        controller.prev().await.unwrap();
        assert_eq!(controller.position(), Some(0));
        assert_eq!(gateway.played(), uris(&["a"]));
    }

    #[tokio::test]
    async fn test_navigation_without_queue_is_noop() {
        let (gateway, mut controller) = controller_with_active_device();
        assert_eq!(controller.next().await.unwrap(), PlayOutcome::Ignored);
        assert_eq!(controller.prev().await.unwrap(), PlayOutcome::Ignored);
        assert_eq!(controller.play_from_queue(3).await.unwrap(), PlayOutcome::Ignored);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_play_from_queue_clamps_index() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);

        controller.play_from_queue(10).await.unwrap();
        assert_eq!(controller.position(), Some(1));
        assert_eq!(gateway.played(), uris(&["b"]));
    }

    #[tokio::test]
    async fn test_play_without_active_device_opens_selection() {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller.update_devices(vec![Device::new("spk", "Office Speaker", "Speaker")]);
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        let outcome = controller.play_from_queue(1).await.unwrap();
        assert_eq!(outcome, PlayOutcome::DeviceSelectionRequired);
        assert_eq!(controller.selection_state(), SelectionState::Open);
        assert!(gateway.played().is_empty());
        assert_eq!(controller.position(), Some(1));
    }

    #[tokio::test]
    async fn test_play_track_leaves_queue_alone() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);

        controller.play_track(TrackUri::from_track_id("z")).await.unwrap();
        assert_eq!(controller.position(), Some(0));
        assert_eq!(controller.queue(), uris(&["a", "b"]).as_slice());
        assert_eq!(gateway.played(), uris(&["z"]));
    }

    #[tokio::test]
    async fn test_repeated_completion_snapshots_advance_once() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        for _ in 0..3 {
            controller.observe(near_end("a")).await.unwrap();
        }

        assert_eq!(controller.position(), Some(1));
        assert_eq!(gateway.played(), uris(&["b"]));
    }

    #[tokio::test]
    async fn test_advance_continues_through_queue() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        let first = controller.observe(near_end("a")).await.unwrap();
        assert!(matches!(first, Some(PlayOutcome::Started { .. })));

        assert_eq!(controller.observe(started("b")).await.unwrap(), None);
        assert_eq!(controller.position(), Some(1));

        controller.observe(near_end("b")).await.unwrap();
        assert_eq!(controller.position(), Some(2));
        assert_eq!(gateway.played(), uris(&["b", "c"]));
    }

    #[tokio::test]
    async fn test_stale_snapshot_after_advance_is_ignored() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);

        controller.observe(near_end("a")).await.unwrap();
        // still reporting the old track after the advance
        controller.observe(near_end("a")).await.unwrap();
        controller.observe(None).await.unwrap();

        assert_eq!(controller.position(), Some(1));
        assert_eq!(gateway.played().len(), 1);
    }

    #[tokio::test]
    async fn test_advance_at_end_of_queue_sends_nothing() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a"]), 0);

        let outcome = controller.observe(near_end("a")).await.unwrap();
        assert_eq!(outcome, Some(PlayOutcome::Ignored));
        assert!(gateway.played().is_empty());
    }

    #[tokio::test]
    async fn test_paused_near_end_does_not_advance() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);

        let mut paused = near_end("a");
        if let Some(snapshot) = paused.as_mut() {
            snapshot.is_playing = false;
        }
        controller.observe(paused).await.unwrap();
        assert_eq!(controller.position(), Some(0));
        assert!(gateway.played().is_empty());
    }

    #[tokio::test]
    async fn test_failed_play_keeps_advanced_position() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b", "c"]), 0);
        gateway.fail_commands(true);

        let result = controller.next().await;
        assert!(matches!(result, Err(ControllerError::Gateway(_))));
        assert_eq!(controller.position(), Some(1));
    }

    #[tokio::test]
    async fn test_failed_advance_is_not_retried() {
        let (gateway, mut controller) = controller_with_active_device();
        controller.set_queue(uris(&["a", "b"]), 0);
        gateway.fail_commands(true);

        assert!(controller.observe(near_end("a")).await.is_err());
        assert!(controller.observe(near_end("a")).await.unwrap().is_none());
        assert_eq!(gateway.played().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_commands_target_active_device() {
        let (gateway, mut controller) = controller_with_active_device();
        let device = DeviceId::new("dev-1");

        for action in [
            TransportAction::Pause,
            TransportAction::Resume,
            TransportAction::SkipNext,
            TransportAction::SkipPrevious,
            TransportAction::Seek(42_000),
            TransportAction::SetVolume(70),
            TransportAction::SetShuffle(true),
            TransportAction::SetRepeat(RepeatMode::Context),
            TransportAction::Enqueue(TrackUri::from_track_id("q")),
        ] {
            let outcome = controller.transport(action).await.unwrap();
            assert_eq!(outcome, CommandOutcome::Sent { device: device.clone() });
        }

        assert_eq!(
            gateway.calls(),
            vec![
                GatewayCall::Pause(device.clone()),
                GatewayCall::Resume(device.clone()),
                GatewayCall::SkipNext(device.clone()),
                GatewayCall::SkipPrevious(device.clone()),
                GatewayCall::Seek { position_ms: 42_000, device: device.clone() },
                GatewayCall::SetVolume { percent: 70, device: device.clone() },
                GatewayCall::SetShuffle { shuffle: true, device: device.clone() },
                GatewayCall::SetRepeat { mode: RepeatMode::Context, device: device.clone() },
                GatewayCall::Enqueue { uri: TrackUri::from_track_id("q"), device },
            ]
        );
    }

    #[tokio::test]
    async fn test_transport_without_device_opens_selection() {
        let gateway = Arc::new(MockGateway::new());
        let mut controller = QueueController::new(Arc::clone(&gateway));

        let outcome = controller.transport(TransportAction::Pause).await.unwrap();
        assert_eq!(outcome, CommandOutcome::DeviceSelectionRequired);
        assert_eq!(controller.selection_state(), SelectionState::Open);
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn test_pick_device_transfers_and_closes() {
        let gateway = Arc::new(MockGateway::with_devices(vec![
            Device::new("spk", "Office Speaker", "Speaker"),
            Device::new("web", "Jane's Web Player", "Computer"),
        ]));
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller.refresh_devices().await;
        controller.set_queue(uris(&["a"]), 0);

        controller.play_from_queue(0).await.unwrap();
        assert_eq!(controller.selection_state(), SelectionState::Open);

        controller.pick_device(&DeviceId::new("spk")).await.unwrap();
        assert_eq!(controller.selection_state(), SelectionState::Closed);
        assert_eq!(controller.active_device().map(|d| d.name.as_str()), Some("Office Speaker"));
        // the interrupted play is not replayed
        assert!(gateway.played().is_empty());
        assert!(gateway.calls().contains(&GatewayCall::Transfer(DeviceId::new("spk"))));
    }

    #[tokio::test]
    async fn test_failed_transfer_keeps_selection_open() {
        let gateway = Arc::new(MockGateway::with_devices(vec![Device::new("spk", "Office Speaker", "Speaker")]));
        let mut controller = QueueController::new(Arc::clone(&gateway));
        controller.open_device_selection();
        gateway.fail_transfer(true);

        let result = controller.pick_device(&DeviceId::new("spk")).await;
        assert!(result.is_err());
        assert_eq!(controller.selection_state(), SelectionState::Open);

        controller.dismiss_device_selection();
        assert_eq!(controller.selection_state(), SelectionState::Closed);
    }

    #[tokio::test]
    async fn test_failed_device_refresh_empties_roster() {
        let (gateway, mut controller) = controller_with_active_device();
        gateway.fail_devices(true);

        assert!(controller.refresh_devices().await.is_empty());
        assert!(controller.active_device().is_none());
    }

    #[tokio::test]
    async fn test_ordered_devices() {
        let (_gateway, mut controller) = controller_with_active_device();
        controller.update_devices(vec![
            Device::new("spk", "Office Speaker", "Speaker"),
            Device::new("web", "Jane's Web Player", "Computer").active(),
        ]);
        let names: Vec<_> = controller.ordered_devices().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Jane's Web Player", "Office Speaker"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn runtime() -> tokio::runtime::Runtime {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap()
        }

        proptest! {
            #[test]
            fn next_moves_forward_with_one_play(len in 2usize..15, seed in 0usize..100) {
                let position = seed % (len - 1);
                let tracks: Vec<TrackUri> = (0..len).map(|i| TrackUri::from_track_id(&format!("t{i}"))).collect();

                runtime().block_on(async {
                    let (gateway, mut controller) = controller_with_active_device();
                    controller.set_queue(tracks.clone(), position);

                    controller.next().await.unwrap();
                    assert_eq!(controller.position(), Some(position + 1));
                    assert_eq!(gateway.played(), vec![tracks[position + 1].clone()]);
                });
            }

            #[test]
            fn next_at_end_and_prev_at_start_do_nothing(len in 1usize..15) {
                let tracks: Vec<TrackUri> = (0..len).map(|i| TrackUri::from_track_id(&format!("t{i}"))).collect();

                runtime().block_on(async {
                    let (gateway, mut controller) = controller_with_active_device();

                    controller.set_queue(tracks.clone(), len - 1);
                    assert_eq!(controller.next().await.unwrap(), PlayOutcome::Ignored);
                    assert_eq!(controller.position(), Some(len - 1));

                    controller.set_queue(tracks.clone(), 0);
                    assert_eq!(controller.prev().await.unwrap(), PlayOutcome::Ignored);
                    assert_eq!(controller.position(), Some(0));

                    assert!(gateway.calls().is_empty());
                });
            }
        }
    }
}
