//! # Background Music Playback
//!
//! Owns the single looping background track of the app.
//!
//! ## Overview
//!
//! - [`PlaybackController`] drives a platform [`MediaService`](bridge_traits::MediaService)
//!   through `Uninitialized → Playing ⇄ Paused → Released`.
//! - [`PlaybackControl`] is the narrow pause/resume seam used by navigation.
//! - [`PlaybackError::MediaUnavailable`] is how platform refusals are reported;
//!   it is logged and published, never returned to callers.
//!
//! ## Usage
//!
//! ```ignore
//! let controller = PlaybackController::new(service, AssetRef::audio("cavadov"), Some(bus));
//! controller.initialize();   // returns immediately
//! controller.pause();        // safe even before init completes
//! controller.teardown();     // also runs on drop
//! ```

pub mod controller;
pub mod error;
pub mod state;
pub mod traits;

pub use controller::{InitHandle, PlaybackController};
pub use error::{PlaybackError, Result};
pub use state::PlaybackState;
pub use traits::PlaybackControl;
