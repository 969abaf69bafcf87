//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (media player, link
//! opener) and the bundled asset manifest into the gallery core, and exposes
//! the small surface a renderer binds to: the current screen, the current
//! photo and video, and the `go_to` / `next` / `previous` actions. Desktop
//! hosts typically enable the `desktop-shims` feature (which depends on
//! `bridge-desktop`) to get silent playback and a system link opener without
//! writing any bridge code.
//!
//! ```ignore
//! use core_runtime::config::{AssetManifest, GaleriaConfig};
//! use core_service::{GaleriaCore, Screen};
//!
//! let manifest = AssetManifest::from_json(include_str!("manifest.json"))?;
//! let core = GaleriaCore::new(GaleriaConfig::builder().manifest(manifest).build()?)?;
//! core.start();
//! core.go_to(Screen::VideoGallery);
//! ```

pub mod error;
pub mod galeria;
pub mod view;

pub use error::{CoreError, Result};
pub use galeria::GaleriaCore;
pub use view::{GalleryKind, GalleryView, ViewState};

pub use core_navigation::Screen;
pub use core_playback::{InitHandle, PlaybackState};
pub use core_runtime::config::{AssetManifest, GaleriaConfig, GalleryRetention, Presentation};
pub use core_runtime::events::{CoreEvent, EventStream};

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop::{SilentMediaService, SystemLinkOpener};
