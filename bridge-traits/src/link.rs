//! External link bridge.
//!
//! The cover screen shows a handful of profile links. Opening them is the
//! host's business (an `ACTION_VIEW` intent on Android, `open`/`xdg-open` on
//! desktop); the core only decides which URL to hand over.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A labelled link rendered on the cover screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalLink {
    /// Stable identifier the renderer binds its button to (e.g. `"instagram"`).
    pub id: String,
    /// Text shown next to the link icon.
    pub label: String,
    /// Absolute `http(s)` URL.
    pub url: String,
}

impl ExternalLink {
    pub fn new(id: impl Into<String>, label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            url: url.into(),
        }
    }

    /// Whether the URL uses a scheme a browser can open.
    pub fn is_web_url(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }
}

/// Hands URLs to the operating system.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::link::LinkOpener;
///
/// fn open_profile(opener: &dyn LinkOpener) {
///     opener.open("https://www.instagram.com/sw0rks_/").ok();
/// }
/// ```
pub trait LinkOpener: Send + Sync {
    /// Open `url` outside the app. Returns once the request has been handed
    /// off; whether a browser actually appears is up to the platform.
    fn open(&self, url: &str) -> Result<()>;
}
