//! Renderer-facing snapshots.

use bridge_traits::{AssetRef, ExternalLink};
use core_navigation::Screen;
use core_playback::PlaybackState;
use core_runtime::config::Presentation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two galleries of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryKind {
    Photos,
    Videos,
}

impl GalleryKind {
    /// Name used in gallery events and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryKind::Photos => "photos",
            GalleryKind::Videos => "videos",
        }
    }

    /// Gallery shown on `screen`, if any.
    pub fn for_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Cover => None,
            Screen::PhotoGallery => Some(GalleryKind::Photos),
            Screen::VideoGallery => Some(GalleryKind::Videos),
        }
    }
}

impl fmt::Display for GalleryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cursor of one gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryView {
    pub gallery: GalleryKind,
    pub asset: AssetRef,
    pub index: usize,
    pub len: usize,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub screen: Screen,
    /// The gallery on screen; `None` on the cover.
    pub gallery: Option<GalleryView>,
    pub playback: PlaybackState,
    pub presentation: Presentation,
    pub links: Vec<ExternalLink>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gallery_screen_mapping() {
        assert_eq!(GalleryKind::for_screen(Screen::Cover), None);
        assert_eq!(
            GalleryKind::for_screen(Screen::PhotoGallery),
            Some(GalleryKind::Photos)
        );
        assert_eq!(
            GalleryKind::for_screen(Screen::VideoGallery),
            Some(GalleryKind::Videos)
        );
    }

    #[test]
    fn test_view_state_serializes_for_renderers() {
        let view = ViewState {
            screen: Screen::PhotoGallery,
            gallery: Some(GalleryView {
                gallery: GalleryKind::Photos,
                asset: AssetRef::image("fotikoyo"),
                index: 0,
                len: 22,
            }),
            playback: PlaybackState::Playing,
            presentation: Presentation::default(),
            links: Vec::new(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["screen"], "photo_gallery");
        assert_eq!(json["gallery"]["gallery"], "photos");
        assert_eq!(json["gallery"]["asset"]["id"], "fotikoyo");
        assert_eq!(json["playback"], "playing");
    }
}
