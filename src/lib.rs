//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-service`, `core-playback`, `core-gallery`).
//! Host applications can depend on `galeria-workspace` and enable the
//! documented features without needing to wire each crate individually:
//!
//! - `desktop-shims` (default): silent media service and system link opener
//!   from `bridge-desktop` are injected when the host provides none.
//! - `headless`: the façade without any desktop defaults; the host must inject
//!   every bridge.

#[cfg(any(feature = "desktop-shims", feature = "headless"))]
pub use core_service::*;
