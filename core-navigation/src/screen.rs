use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level screens of the app. The app starts on [`Screen::Cover`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Cover,
    PhotoGallery,
    VideoGallery,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Cover, Screen::PhotoGallery, Screen::VideoGallery];

    /// Stable identifier used in events and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::Cover => "cover",
            Screen::PhotoGallery => "photo_gallery",
            Screen::VideoGallery => "video_gallery",
        }
    }

    /// Whether background music plays while this screen is shown.
    ///
    /// Videos carry their own sound, so the track is paused on the video
    /// screen only.
    pub fn wants_music(&self) -> bool {
        !matches!(self, Screen::VideoGallery)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
