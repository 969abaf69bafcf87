//! Media bridge trait for the background audio track.
//!
//! The core drives exactly one looping audio track. Hosts wrap their native
//! primitive (Android `MediaPlayer`, AVAudioPlayer, a desktop audio sink) in a
//! [`MediaService`] and hand it to the core. Calls are synchronous and
//! fire-and-forget from the core's point of view: errors are logged, never
//! retried.

use crate::{assets::AssetRef, error::Result};
use std::fmt;
use uuid::Uuid;

/// Identifier of a media resource created by a [`MediaService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaHandle(Uuid);

impl MediaHandle {
    /// Generate a new handle.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Construct a handle from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MediaHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform audio primitive.
///
/// # Threading
///
/// [`create`](MediaService::create) may block (decoding headers, opening
/// audio routes) and is called from a background worker. Every other method
/// is called from the UI thread and should return quickly.
///
/// # Errors
///
/// Returning an error from `create` or `start` means "no audio"; the core
/// keeps running silently.
pub trait MediaService: Send + Sync {
    /// Allocate a native player for `asset`. The player is prepared but not
    /// started.
    fn create(&self, asset: &AssetRef) -> Result<MediaHandle>;

    /// Enable or disable looping for the player.
    fn set_looping(&self, handle: MediaHandle, looping: bool) -> Result<()>;

    /// Begin or resume playback.
    fn start(&self, handle: MediaHandle) -> Result<()>;

    /// Pause playback without releasing the player.
    fn pause(&self, handle: MediaHandle) -> Result<()>;

    /// Release the native player. The handle is invalid afterwards.
    fn release(&self, handle: MediaHandle) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique() {
        let a = MediaHandle::new();
        let b = MediaHandle::new();
        assert_ne!(a, b);
        assert_eq!(a, MediaHandle::from_uuid(*a.as_uuid()));
    }

    #[test]
    fn handle_displays_as_uuid() {
        let handle = MediaHandle::new();
        assert_eq!(handle.to_string(), handle.as_uuid().to_string());
    }
}
