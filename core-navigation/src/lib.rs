//! # Navigation
//!
//! The closed set of screens and the state machine that switches between
//! them, pausing or resuming background music as a side effect.

pub mod controller;
pub mod screen;

pub use controller::NavigationController;
pub use screen::Screen;
