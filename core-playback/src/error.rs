//! # Playback Error Types

use bridge_traits::error::BridgeError;
use thiserror::Error;

/// Errors produced while driving the background track.
///
/// None of these reach the renderer. The controller logs them, publishes a
/// `PlaybackEvent::Unavailable` and keeps the most recent one for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// The platform refused to create, configure or start the audio resource.
    #[error("Background music unavailable: {0}")]
    MediaUnavailable(String),
}

impl From<BridgeError> for PlaybackError {
    fn from(err: BridgeError) -> Self {
        PlaybackError::MediaUnavailable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PlaybackError>;
