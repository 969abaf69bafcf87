//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop and headless hosts
//! (macOS, Windows, Linux, CI).
//!
//! ## Overview
//!
//! - `MediaService` using [`SilentMediaService`]: tracks player sessions and
//!   their play/pause state without producing sound. Useful for development
//!   hosts, demos and tests where no audio device is available.
//! - `LinkOpener` using [`SystemLinkOpener`]: hands URLs to the platform
//!   launcher (`xdg-open`, `open`, `cmd /C start`).
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::{SilentMediaService, SystemLinkOpener};
//! use std::sync::Arc;
//!
//! let config = GaleriaConfig::builder()
//!     .media_service(Arc::new(SilentMediaService::new()))
//!     .link_opener(Arc::new(SystemLinkOpener::new()))
//!     // ...
//!     .build()?;
//! ```

mod link;
mod media;

pub use link::SystemLinkOpener;
pub use media::{SessionSnapshot, SilentMediaService};
