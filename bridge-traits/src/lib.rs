//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the gallery core and the platform
//! it runs on. The core never plays audio, opens a browser or writes to a log
//! file itself; it asks one of these bridges to do it.
//!
//! ## Traits
//!
//! ### Media
//! - [`MediaService`](media::MediaService) - Single-track audio primitive
//!   (create, loop, start, pause, release)
//!
//! ### Platform Integration
//! - [`LinkOpener`](link::LinkOpener) - Hand external URLs to the OS browser
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ### Assets
//! - [`AssetRef`](assets::AssetRef) - Opaque handle to a bundled image, video or
//!   audio resource
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop / headless | `bridge-desktop` | ✅ Silent media, system link opener |
//! | Android  | host app (MediaPlayer, Intent.ACTION_VIEW) | 📋 Injected by host |
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). The core treats
//! media errors as non-fatal: they are logged and audio is skipped.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync`: the media service is created on a
//! background worker and then driven from the UI thread.
//!
//! ## Example
//!
//! ```ignore
//! use bridge_traits::media::{MediaHandle, MediaService};
//! use bridge_traits::{AssetRef, Result};
//!
//! struct AndroidMediaPlayer { /* JNI handles */ }
//!
//! impl MediaService for AndroidMediaPlayer {
//!     fn create(&self, asset: &AssetRef) -> Result<MediaHandle> {
//!         // MediaPlayer.create(context, R.raw.<asset.id()>)
//!         todo!()
//!     }
//!     // ...
//! }
//! ```

pub mod assets;
pub mod error;
pub mod link;
pub mod logging;
pub mod media;

pub use error::{BridgeError, Result};

// Re-export commonly used types
pub use assets::{AssetKind, AssetRef};
pub use link::{ExternalLink, LinkOpener};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use media::{MediaHandle, MediaService};
