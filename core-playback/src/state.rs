use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the background track.
///
/// ```text
/// Uninitialized ──init──▶ Playing ◀──▶ Paused
///       │                    │           │
///       └──────────── teardown ──────────┴──▶ Released
/// ```
///
/// `Released` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Uninitialized,
    Playing,
    Paused,
    Released,
}

impl PlaybackState {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackState::Playing)
    }

    pub fn is_released(&self) -> bool {
        matches!(self, PlaybackState::Released)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaybackState::Uninitialized => "uninitialized",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Released => "released",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
