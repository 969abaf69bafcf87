//! # Core Configuration Module
//!
//! Provides configuration management for the gallery core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `GaleriaConfig` holding the bundled asset lists, the presentation text and
//! the platform bridges. It enforces fail-fast validation: an app with an
//! empty gallery or no media service never starts.
//!
//! ## Required Inputs
//!
//! - Photo list (non-empty, images only)
//! - Video list (non-empty, videos only)
//! - Background track (an audio asset)
//! - `MediaService` - injected by the host, or the silent desktop default when
//!   the `desktop-shims` feature is enabled
//!
//! ## Optional Inputs
//!
//! - `LinkOpener` (desktop default: system launcher)
//! - External links, presentation captions, gallery retention policy
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::{AssetManifest, GaleriaConfig};
//! use std::sync::Arc;
//!
//! let manifest = AssetManifest::from_json(include_str!("../assets/manifest.json"))?;
//! let config = GaleriaConfig::builder()
//!     .manifest(manifest)
//!     .media_service(Arc::new(MyMediaPlayer::new()))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{AssetKind, AssetRef, ExternalLink, LinkOpener, MediaService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::events::DEFAULT_EVENT_BUFFER_SIZE;

/// What happens to a gallery's cursor when its screen is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryRetention {
    /// Leaving a gallery screen tears it down; re-entering starts at the
    /// first asset again.
    #[default]
    ResetOnLeave,
    /// Both cursors survive screen changes for the whole session.
    Session,
}

/// Static text shown by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presentation {
    /// Large title on the cover screen.
    pub title: String,
    /// Author line under the title.
    pub subtitle: String,
    /// Header above the photo gallery.
    pub photo_caption: String,
    /// Lines under the photo gallery (camera, film stock).
    pub photo_footer: Vec<String>,
    /// Header above the video gallery.
    pub video_caption: String,
}

/// Bundled description of every asset the app ships with.
///
/// This is the compile-time-known asset collaborator: hosts embed the JSON
/// with `include_str!` (or build it in code) and nothing is discovered at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetManifest {
    pub photos: Vec<AssetRef>,
    pub videos: Vec<AssetRef>,
    pub background_track: AssetRef,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    #[serde(default)]
    pub presentation: Presentation,
    #[serde(default)]
    pub gallery_retention: GalleryRetention,
}

impl AssetManifest {
    /// Parse a manifest from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Core configuration for the gallery app.
///
/// Use [`GaleriaConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct GaleriaConfig {
    pub photos: Vec<AssetRef>,
    pub videos: Vec<AssetRef>,
    pub background_track: AssetRef,

    /// Platform audio primitive for the background track (required)
    pub media_service: Arc<dyn MediaService>,

    /// Browser launcher for the cover links (optional)
    pub link_opener: Option<Arc<dyn LinkOpener>>,

    pub external_links: Vec<ExternalLink>,
    pub presentation: Presentation,
    pub gallery_retention: GalleryRetention,

    /// Capacity of the event bus channel
    pub event_buffer_size: usize,
}

impl std::fmt::Debug for GaleriaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GaleriaConfig")
            .field("photos", &self.photos.len())
            .field("videos", &self.videos.len())
            .field("background_track", &self.background_track)
            .field("media_service", &"MediaService { ... }")
            .field(
                "link_opener",
                &self.link_opener.as_ref().map(|_| "LinkOpener { ... }"),
            )
            .field("external_links", &self.external_links)
            .field("presentation", &self.presentation)
            .field("gallery_retention", &self.gallery_retention)
            .field("event_buffer_size", &self.event_buffer_size)
            .finish()
    }
}

fn validate_assets(gallery: &str, assets: &[AssetRef], kind: AssetKind) -> Result<()> {
    if assets.is_empty() {
        return Err(Error::InvalidConfiguration(format!(
            "The {} gallery needs at least one asset",
            gallery
        )));
    }

    if let Some(wrong) = assets.iter().find(|asset| asset.kind() != kind) {
        return Err(Error::InvalidConfiguration(format!(
            "The {} gallery only accepts {} assets, found {}",
            gallery, kind, wrong
        )));
    }

    Ok(())
}

impl GaleriaConfig {
    /// Creates a new builder for constructing a `GaleriaConfig`.
    pub fn builder() -> GaleriaConfigBuilder {
        GaleriaConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks:
    /// - Both galleries are non-empty and hold the right asset kind
    /// - The background track is an audio asset
    /// - Link ids are unique and URLs are `http(s)`
    /// - The event buffer can hold at least one event
    pub fn validate(&self) -> Result<()> {
        validate_assets("photo", &self.photos, AssetKind::Image)?;
        validate_assets("video", &self.videos, AssetKind::Video)?;

        if self.background_track.kind() != AssetKind::Audio {
            return Err(Error::InvalidConfiguration(format!(
                "Background track must be an audio asset, found {}",
                self.background_track
            )));
        }

        for (position, link) in self.external_links.iter().enumerate() {
            if !link.is_web_url() {
                return Err(Error::Config(format!(
                    "Link '{}' must use http or https: {}",
                    link.id, link.url
                )));
            }
            if self.external_links[..position]
                .iter()
                .any(|other| other.id == link.id)
            {
                return Err(Error::Config(format!("Duplicate link id '{}'", link.id)));
            }
        }

        if self.event_buffer_size == 0 {
            return Err(Error::Config(
                "Event buffer size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Look up a cover link by id.
    pub fn link(&self, id: &str) -> Option<&ExternalLink> {
        self.external_links.iter().find(|link| link.id == id)
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn media_service_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "MediaService".to_string(),
        message: "MediaService implementation is required for the background track. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default SilentMediaService. \
                 Android: inject a MediaPlayer-backed service."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_media_service() -> Result<Arc<dyn MediaService>> {
    use bridge_desktop::SilentMediaService;

    let service: Arc<dyn MediaService> = Arc::new(SilentMediaService::new());
    Ok(service)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_media_service() -> Result<Arc<dyn MediaService>> {
    Err(media_service_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_link_opener() -> Option<Arc<dyn LinkOpener>> {
    use bridge_desktop::SystemLinkOpener;

    let opener: Arc<dyn LinkOpener> = Arc::new(SystemLinkOpener::new());
    Some(opener)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_link_opener() -> Option<Arc<dyn LinkOpener>> {
    None
}

/// Builder for constructing [`GaleriaConfig`] instances.
#[derive(Default)]
pub struct GaleriaConfigBuilder {
    photos: Option<Vec<AssetRef>>,
    videos: Option<Vec<AssetRef>>,
    background_track: Option<AssetRef>,
    media_service: Option<Arc<dyn MediaService>>,
    link_opener: Option<Arc<dyn LinkOpener>>,
    external_links: Vec<ExternalLink>,
    presentation: Presentation,
    gallery_retention: GalleryRetention,
    event_buffer_size: Option<usize>,
}

impl GaleriaConfigBuilder {
    /// Take assets, links, captions and retention from a bundled manifest.
    /// Later builder calls override individual fields.
    pub fn manifest(mut self, manifest: AssetManifest) -> Self {
        self.photos = Some(manifest.photos);
        self.videos = Some(manifest.videos);
        self.background_track = Some(manifest.background_track);
        self.external_links = manifest.links;
        self.presentation = manifest.presentation;
        self.gallery_retention = manifest.gallery_retention;
        self
    }

    /// Sets the ordered photo list.
    pub fn photos(mut self, photos: Vec<AssetRef>) -> Self {
        self.photos = Some(photos);
        self
    }

    /// Sets the ordered video list.
    pub fn videos(mut self, videos: Vec<AssetRef>) -> Self {
        self.videos = Some(videos);
        self
    }

    /// Sets the looping background track.
    pub fn background_track(mut self, track: AssetRef) -> Self {
        self.background_track = Some(track);
        self
    }

    /// Sets the platform media service.
    ///
    /// If not provided, the silent desktop default is used when the
    /// `desktop-shims` feature is enabled.
    pub fn media_service(mut self, service: Arc<dyn MediaService>) -> Self {
        self.media_service = Some(service);
        self
    }

    /// Sets the link opener used by the cover screen links.
    pub fn link_opener(mut self, opener: Arc<dyn LinkOpener>) -> Self {
        self.link_opener = Some(opener);
        self
    }

    pub fn external_links(mut self, links: Vec<ExternalLink>) -> Self {
        self.external_links = links;
        self
    }

    pub fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    pub fn gallery_retention(mut self, retention: GalleryRetention) -> Self {
        self.gallery_retention = retention;
        self
    }

    /// Sets the event bus capacity.
    ///
    /// Default: 64 events
    pub fn event_buffer_size(mut self, size: usize) -> Self {
        self.event_buffer_size = Some(size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if a gallery is missing or empty, or the
    ///   background track is missing or not audio
    /// - `CapabilityMissing` if no `MediaService` is available
    /// - `Config` for malformed links or a zero event buffer
    pub fn build(self) -> Result<GaleriaConfig> {
        let photos = self.photos.ok_or_else(|| {
            Error::InvalidConfiguration("Photo list is required".to_string())
        })?;
        let videos = self.videos.ok_or_else(|| {
            Error::InvalidConfiguration("Video list is required".to_string())
        })?;
        let background_track = self.background_track.ok_or_else(|| {
            Error::InvalidConfiguration("Background track is required".to_string())
        })?;

        let media_service = match self.media_service {
            Some(service) => service,
            None => provide_default_media_service()?,
        };

        let link_opener = self.link_opener.or_else(provide_default_link_opener);

        let config = GaleriaConfig {
            photos,
            videos,
            background_track,
            media_service,
            link_opener,
            external_links: self.external_links,
            presentation: self.presentation,
            gallery_retention: self.gallery_retention,
            event_buffer_size: self.event_buffer_size.unwrap_or(DEFAULT_EVENT_BUFFER_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}
