use std::sync::Arc;

use tracing::debug;
use web_client::{WebClient, WebClientConfig, WebRequest};

use crate::models::{
    DeviceObject, PlaybackStateObject, QueueObject, RecentlyPlayedObject, RepeatState, TrackObject,
};
use crate::operation::SpotifyOperation;
use crate::operations::player::{
    AddToQueueRequest, GetDevicesRequest, GetPlaybackStateRequest, GetQueueRequest, PauseRequest,
    PlayTrackRequest, RecentlyPlayedRequest, ResumeRequest, SeekRequest, SetRepeatRequest,
    SetShuffleRequest, SetVolumeRequest, SkipRequest, TransferPlaybackRequest,
};
use crate::operations::tracks::GetTrackRequest;
use crate::operations::{
    AddToQueueOperation, GetDevicesOperation, GetPlaybackStateOperation, GetQueueOperation,
    GetTrackOperation, PauseOperation, PlayTrackOperation, RecentlyPlayedOperation,
    ResumeOperation, SeekOperation, SetRepeatOperation, SetShuffleOperation, SetVolumeOperation,
    SkipToNextOperation, SkipToPreviousOperation, TransferPlaybackOperation,
};
use crate::token::TokenProvider;
use crate::Result;

/// A client for executing Spotify operations on behalf of one user
///
/// This client bridges the stateless operation definitions and actual HTTP
/// requests. Tokens are requested from the [`TokenProvider`] on every call,
/// so a provider that refreshes tokens keeps a long-lived client working.
///
/// ```rust,ignore
/// use spotify_api::{SpotifyClient, StaticToken};
/// use spotify_api::operations::player::SetVolumeRequest;
/// use spotify_api::operations::SetVolumeOperation;
///
/// let client = SpotifyClient::new(StaticToken::shared("BQD..."))?;
/// let request = SetVolumeRequest { volume_percent: 40, device_id: None };
/// client.execute::<SetVolumeOperation>(&request).await?;
/// ```
#[derive(Clone)]
pub struct SpotifyClient {
    web: WebClient,
    token: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("base_url", &self.web.base_url())
            .finish_non_exhaustive()
    }
}

impl SpotifyClient {
    /// Create a client against the public Web API
    pub fn new(token: Arc<dyn TokenProvider>) -> Result<Self> {
        Ok(Self::with_web_client(WebClient::new()?, token))
    }

    /// Create a client with explicit transport settings
    pub fn with_config(config: WebClientConfig, token: Arc<dyn TokenProvider>) -> Result<Self> {
        Ok(Self::with_web_client(WebClient::with_config(config)?, token))
    }

    /// Create a client around an existing transport
    pub fn with_web_client(web: WebClient, token: Arc<dyn TokenProvider>) -> Self {
        Self { web, token }
    }

    /// The token provider this client authenticates with
    pub fn token_provider(&self) -> Arc<dyn TokenProvider> {
        Arc::clone(&self.token)
    }

    /// Execute a Spotify operation
    ///
    /// Validates the request, fetches a token, sends the request and parses
    /// the response. Validation failures never reach the network.
    pub async fn execute<Op: SpotifyOperation>(&self, request: &Op::Request) -> Result<Op::Response> {
        Op::validate(request)?;

        let token = self.token.access_token().await?;

        let mut web_request = WebRequest::new(Op::METHOD, Op::path(request));
        web_request.query = Op::query(request);
        web_request.body = Op::body(request);

        debug!(method = ?Op::METHOD, path = %web_request.path, "executing spotify operation");

        let body = self.web.call(web_request, &token).await?;
        Op::parse_response(body.as_deref())
    }

    /// Current playback state, `None` when nothing is playing
    pub async fn current_playback(&self) -> Result<Option<PlaybackStateObject>> {
        self.execute::<GetPlaybackStateOperation>(&GetPlaybackStateRequest)
            .await
    }

    /// Devices available to the user
    pub async fn devices(&self) -> Result<Vec<DeviceObject>> {
        self.execute::<GetDevicesOperation>(&GetDevicesRequest).await
    }

    pub async fn transfer_playback(&self, device_id: &str, play: bool) -> Result<()> {
        self.execute::<TransferPlaybackOperation>(&TransferPlaybackRequest {
            device_id: device_id.to_string(),
            play,
        })
        .await
    }

    /// Start a single track on the given device
    pub async fn play_track(&self, uri: &str, device_id: Option<&str>) -> Result<()> {
        self.execute::<PlayTrackOperation>(&PlayTrackRequest::single(
            uri,
            device_id.map(str::to_string),
        ))
        .await
    }

    pub async fn resume(&self, device_id: Option<&str>) -> Result<()> {
        self.execute::<ResumeOperation>(&ResumeRequest {
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn pause(&self, device_id: Option<&str>) -> Result<()> {
        self.execute::<PauseOperation>(&PauseRequest {
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn skip_next(&self, device_id: Option<&str>) -> Result<()> {
        self.execute::<SkipToNextOperation>(&SkipRequest {
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn skip_previous(&self, device_id: Option<&str>) -> Result<()> {
        self.execute::<SkipToPreviousOperation>(&SkipRequest {
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn seek(&self, position_ms: u64, device_id: Option<&str>) -> Result<()> {
        self.execute::<SeekOperation>(&SeekRequest {
            position_ms,
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn set_volume(&self, volume_percent: u8, device_id: Option<&str>) -> Result<()> {
        self.execute::<SetVolumeOperation>(&SetVolumeRequest {
            volume_percent,
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn set_shuffle(&self, state: bool, device_id: Option<&str>) -> Result<()> {
        self.execute::<SetShuffleOperation>(&SetShuffleRequest {
            state,
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    pub async fn set_repeat(&self, state: RepeatState, device_id: Option<&str>) -> Result<()> {
        self.execute::<SetRepeatOperation>(&SetRepeatRequest {
            state,
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    /// Append a track to the device's own playback queue
    pub async fn add_to_queue(&self, uri: &str, device_id: Option<&str>) -> Result<()> {
        self.execute::<AddToQueueOperation>(&AddToQueueRequest {
            uri: uri.to_string(),
            device_id: device_id.map(str::to_string),
        })
        .await
    }

    /// Catalogue lookup by bare track id
    pub async fn track(&self, id: &str) -> Result<TrackObject> {
        self.execute::<GetTrackOperation>(&GetTrackRequest { id: id.to_string() })
            .await
    }

    pub async fn recently_played(&self, limit: u8) -> Result<RecentlyPlayedObject> {
        self.execute::<RecentlyPlayedOperation>(&RecentlyPlayedRequest { limit })
            .await
    }

    /// The device-side queue, as Spotify sees it
    pub async fn user_queue(&self) -> Result<QueueObject> {
        self.execute::<GetQueueOperation>(&GetQueueRequest).await
    }
}
