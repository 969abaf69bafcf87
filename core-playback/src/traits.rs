//! # Playback Control Seam
//!
//! Navigation only needs to pause and resume the background track. It talks
//! to this trait rather than to [`PlaybackController`](crate::PlaybackController)
//! so the navigation rules can be tested against a mock.

/// Pause/resume surface of the background track.
///
/// Both calls are infallible from the caller's point of view: when the
/// underlying resource is absent or already in the requested state they do
/// nothing.
pub trait PlaybackControl: Send + Sync {
    fn pause(&self);

    fn resume(&self);
}
