//! Player session actor
//!
//! One [`QueueController`] per user session, owned by a single task. Callers
//! hold a cloneable [`PlayerHandle`] and talk to the task over a command
//! channel; every command gets a oneshot reply. The poller feeds snapshots
//! and device lists into the same task, so all mutation happens in one
//! place, in arrival order.

use std::fmt;
use std::ops::ControlFlow;
use std::sync::Arc;

use playback_state::{
    feed_queue, CommandOutcome, Device, DeviceId, PlayOutcome, PlayerGateway, Post,
    QueueController, RepeatMode, TrackUri, TransportAction,
};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{Result, SdkError};
use crate::poller::{PollEvent, SnapshotPoller};
use crate::view::PlayerView;

/// Identifies one player session in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Reply<T> = oneshot::Sender<playback_state::Result<T>>;

enum SessionCommand {
    SetQueue {
        tracks: Vec<TrackUri>,
        start_index: usize,
        reply: oneshot::Sender<()>,
    },
    PlayFromQueue {
        index: usize,
        reply: Reply<PlayOutcome>,
    },
    Next {
        reply: Reply<PlayOutcome>,
    },
    Prev {
        reply: Reply<PlayOutcome>,
    },
    PlayTrack {
        uri: TrackUri,
        reply: Reply<PlayOutcome>,
    },
    Transport {
        action: TransportAction,
        reply: Reply<CommandOutcome>,
    },
    OpenSelection {
        reply: oneshot::Sender<()>,
    },
    DismissSelection {
        reply: oneshot::Sender<()>,
    },
    PickDevice {
        device: DeviceId,
        reply: Reply<()>,
    },
    RefreshDevices {
        reply: oneshot::Sender<Vec<Device>>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Spawns player sessions
pub struct PlayerSession;

impl PlayerSession {
    /// Build a controller around `gateway`, start polling and return a handle
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<G>(gateway: Arc<G>, config: SessionConfig) -> Result<PlayerHandle>
    where
        G: PlayerGateway + ?Sized + 'static,
    {
        config.validate()?;

        let id = SessionId::new();
        let threshold_ms = u64::try_from(config.advance_threshold.as_millis()).unwrap_or(u64::MAX);
        let controller = QueueController::new(Arc::clone(&gateway)).with_advance_threshold(threshold_ms);

        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size);
        let (poll_tx, poll_rx) = mpsc::channel(config.command_buffer_size);
        let (view_tx, view_rx) = watch::channel(PlayerView::default());

        let poller = SnapshotPoller::start(
            gateway,
            config.poll_interval,
            config.device_refresh_every,
            poll_tx,
        );

        let actor = SessionActor {
            controller,
            view_tx,
            last_error: None,
            poller,
        };

        let span = tracing::info_span!("player_session", session_id = %id);
        tokio::spawn(actor.run(command_rx, poll_rx).instrument(span));

        info!(session_id = %id, poll_interval = ?config.poll_interval, "player session started");

        Ok(PlayerHandle {
            id,
            commands: command_tx,
            view: view_rx,
        })
    }
}

struct SessionActor<G: ?Sized> {
    controller: QueueController<G>,
    view_tx: watch::Sender<PlayerView>,
    last_error: Option<String>,
    poller: SnapshotPoller,
}

impl<G> SessionActor<G>
where
    G: PlayerGateway + ?Sized + 'static,
{
    async fn run(
        mut self,
        mut commands: mpsc::Receiver<SessionCommand>,
        mut polls: mpsc::Receiver<PollEvent>,
    ) {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => {
                        if self.handle_command(command).await.is_break() {
                            break;
                        }
                    }
                    // every handle dropped
                    None => break,
                },
                Some(event) = polls.recv() => {
                    self.handle_poll(event).await;
                    self.publish();
                }
            }
        }

        self.poller.stop();
        info!("player session stopped");
    }

    /// Apply one command, publish the view, then reply
    async fn handle_command(&mut self, command: SessionCommand) -> ControlFlow<()> {
        match command {
            SessionCommand::SetQueue {
                tracks,
                start_index,
                reply,
            } => {
                self.controller.set_queue(tracks, start_index);
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::PlayFromQueue { index, reply } => {
                let result = self.controller.play_from_queue(index).await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::Next { reply } => {
                let result = self.controller.next().await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::Prev { reply } => {
                let result = self.controller.prev().await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::PlayTrack { uri, reply } => {
                let result = self.controller.play_track(uri).await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::Transport { action, reply } => {
                let result = self.controller.transport(action).await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::OpenSelection { reply } => {
                self.controller.open_device_selection();
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::DismissSelection { reply } => {
                self.controller.dismiss_device_selection();
                self.publish();
                let _ = reply.send(());
            }
            SessionCommand::PickDevice { device, reply } => {
                let result = self.controller.pick_device(&device).await;
                self.record(&result);
                self.publish();
                let _ = reply.send(result);
            }
            SessionCommand::RefreshDevices { reply } => {
                let devices = self.controller.refresh_devices().await.to_vec();
                self.publish();
                let _ = reply.send(devices);
            }
            SessionCommand::Shutdown { reply } => {
                self.poller.stop();
                self.publish();
                let _ = reply.send(());
                return ControlFlow::Break(());
            }
        }

        ControlFlow::Continue(())
    }

    async fn handle_poll(&mut self, event: PollEvent) {
        match event {
            PollEvent::Devices(devices) => self.controller.update_devices(devices),
            PollEvent::Snapshot(snapshot) => match self.controller.observe(snapshot).await {
                Ok(Some(outcome)) => debug!(?outcome, "auto-advance"),
                Ok(None) => {}
                Err(e) => {
                    warn!(error = %e, "auto-advance failed");
                    self.last_error = Some(e.to_string());
                }
            },
        }
    }

    fn record<T>(&mut self, result: &playback_state::Result<T>) {
        match result {
            Ok(_) => self.last_error = None,
            Err(e) => {
                warn!(error = %e, "player command failed");
                self.last_error = Some(e.to_string());
            }
        }
    }

    fn publish(&self) {
        let controller = &self.controller;
        let view = PlayerView {
            queue: controller.queue().to_vec(),
            queue_index: controller.position(),
            snapshot: controller.snapshot().cloned(),
            devices: controller.ordered_devices(),
            active_device: controller.active_device().cloned(),
            active_device_id: controller.active_device_id(),
            selection: controller.selection_state(),
            last_error: self.last_error.clone(),
        };

        self.view_tx.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }
}

/// Cloneable handle to a running player session
///
/// Dropping every handle stops the session.
#[derive(Clone)]
pub struct PlayerHandle {
    id: SessionId,
    commands: mpsc::Sender<SessionCommand>,
    view: watch::Receiver<PlayerView>,
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlayerHandle").field("id", &self.id).finish_non_exhaustive()
    }
}

impl PlayerHandle {
    pub fn id(&self) -> SessionId {
        self.id
    }

    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> SessionCommand) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .await
            .map_err(|_| SdkError::SessionClosed)?;
        response.await.map_err(|_| SdkError::SessionClosed)
    }

    async fn command<T>(&self, build: impl FnOnce(Reply<T>) -> SessionCommand) -> Result<T> {
        Ok(self.request(build).await??)
    }

    /// Replace the queue without starting playback
    pub async fn set_queue(&self, tracks: Vec<TrackUri>, start_index: usize) -> Result<()> {
        self.request(|reply| SessionCommand::SetQueue {
            tracks,
            start_index,
            reply,
        })
        .await
    }

    /// Queue one track per post, in feed order, starting at the first
    pub async fn load_feed(&self, posts: &[Post]) -> Result<()> {
        self.set_queue(feed_queue(posts), 0).await
    }

    pub async fn play_from_queue(&self, index: usize) -> Result<PlayOutcome> {
        self.command(|reply| SessionCommand::PlayFromQueue { index, reply })
            .await
    }

    pub async fn next(&self) -> Result<PlayOutcome> {
        self.command(|reply| SessionCommand::Next { reply }).await
    }

    pub async fn prev(&self) -> Result<PlayOutcome> {
        self.command(|reply| SessionCommand::Prev { reply }).await
    }

    /// Play one track outside the queue
    pub async fn play_track(&self, uri: TrackUri) -> Result<PlayOutcome> {
        self.command(|reply| SessionCommand::PlayTrack { uri, reply })
            .await
    }

    pub async fn transport(&self, action: TransportAction) -> Result<CommandOutcome> {
        self.command(|reply| SessionCommand::Transport { action, reply })
            .await
    }

    pub async fn pause(&self) -> Result<CommandOutcome> {
        self.transport(TransportAction::Pause).await
    }

    pub async fn resume(&self) -> Result<CommandOutcome> {
        self.transport(TransportAction::Resume).await
    }

    pub async fn skip_next(&self) -> Result<CommandOutcome> {
        self.transport(TransportAction::SkipNext).await
    }

    pub async fn skip_previous(&self) -> Result<CommandOutcome> {
        self.transport(TransportAction::SkipPrevious).await
    }

    pub async fn seek(&self, position_ms: u64) -> Result<CommandOutcome> {
        self.transport(TransportAction::Seek(position_ms)).await
    }

    pub async fn set_volume(&self, volume_percent: u8) -> Result<CommandOutcome> {
        self.transport(TransportAction::SetVolume(volume_percent))
            .await
    }

    pub async fn set_shuffle(&self, shuffle: bool) -> Result<CommandOutcome> {
        self.transport(TransportAction::SetShuffle(shuffle)).await
    }

    /// Flip the shuffle state last reported by the device
    pub async fn toggle_shuffle(&self) -> Result<CommandOutcome> {
        let shuffle = !self.view().shuffle();
        self.set_shuffle(shuffle).await
    }

    pub async fn set_repeat(&self, mode: RepeatMode) -> Result<CommandOutcome> {
        self.transport(TransportAction::SetRepeat(mode)).await
    }

    /// Step the repeat mode: off, context, track, off
    pub async fn cycle_repeat(&self) -> Result<CommandOutcome> {
        let mode = self.view().repeat().cycle();
        self.set_repeat(mode).await
    }

    /// Append to the device's own queue
    pub async fn enqueue(&self, uri: TrackUri) -> Result<CommandOutcome> {
        self.transport(TransportAction::Enqueue(uri)).await
    }

    pub async fn open_device_selection(&self) -> Result<()> {
        self.request(|reply| SessionCommand::OpenSelection { reply })
            .await
    }

    pub async fn dismiss_device_selection(&self) -> Result<()> {
        self.request(|reply| SessionCommand::DismissSelection { reply })
            .await
    }

    /// Transfer playback to `device`; device selection closes on success
    pub async fn pick_device(&self, device: DeviceId) -> Result<()> {
        self.command(|reply| SessionCommand::PickDevice { device, reply })
            .await
    }

    /// Refetch the device list now instead of waiting for the poller
    pub async fn refresh_devices(&self) -> Result<Vec<Device>> {
        self.request(|reply| SessionCommand::RefreshDevices { reply })
            .await
    }

    /// Latest published state
    pub fn view(&self) -> PlayerView {
        self.view.borrow().clone()
    }

    /// Receiver that wakes on every state change
    pub fn watch(&self) -> watch::Receiver<PlayerView> {
        self.view.clone()
    }

    /// Stop polling and the session task; other handles see `SessionClosed`
    pub async fn shutdown(&self) -> Result<()> {
        self.request(|reply| SessionCommand::Shutdown { reply })
            .await
    }
}
