//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the gallery core:
//! - Logging and tracing infrastructure
//! - Configuration management (builder and bundled asset manifest)
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the gallery, playback,
//! navigation and service crates depend on. It establishes the logging
//! conventions, the fail-fast configuration rules and the event broadcasting
//! mechanism renderers subscribe to.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
