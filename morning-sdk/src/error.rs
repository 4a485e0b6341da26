use playback_state::ControllerError;
use spotify_api::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Controller error: {0}")]
    Controller(#[from] ControllerError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Player session closed")]
    SessionClosed,
}

pub type Result<T> = std::result::Result<T, SdkError>;
