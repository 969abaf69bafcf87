//! The [`GaleriaCore`] façade.

use crate::error::{CoreError, Result};
use crate::view::{GalleryKind, GalleryView, ViewState};
use bridge_traits::{AssetRef, ExternalLink, LinkOpener};
use core_gallery::GalleryModel;
use core_navigation::{NavigationController, Screen};
use core_playback::{InitHandle, PlaybackError, PlaybackState, PlaybackController};
use core_runtime::config::{GaleriaConfig, GalleryRetention, Presentation};
use core_runtime::events::{CoreEvent, EventBus, EventStream, LinkEvent};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// State touched by renderer callbacks. One lock keeps screen and cursors
/// consistent within a frame.
struct UiState {
    navigation: NavigationController,
    photos: GalleryModel<AssetRef>,
    videos: GalleryModel<AssetRef>,
}

impl UiState {
    fn gallery(&self, kind: GalleryKind) -> &GalleryModel<AssetRef> {
        match kind {
            GalleryKind::Photos => &self.photos,
            GalleryKind::Videos => &self.videos,
        }
    }

    fn gallery_mut(&mut self, kind: GalleryKind) -> &mut GalleryModel<AssetRef> {
        match kind {
            GalleryKind::Photos => &mut self.photos,
            GalleryKind::Videos => &mut self.videos,
        }
    }
}

/// Application core handed to the renderer.
///
/// Owns the navigation state machine, both galleries and the background
/// track. Created at app start, torn down with [`shutdown`](Self::shutdown)
/// or on drop.
pub struct GaleriaCore {
    ui: Mutex<UiState>,
    playback: Arc<PlaybackController>,
    link_opener: Option<Arc<dyn LinkOpener>>,
    links: Vec<ExternalLink>,
    presentation: Presentation,
    retention: GalleryRetention,
    events: EventBus,
}

impl GaleriaCore {
    /// Build the core from a validated configuration.
    ///
    /// Playback is not started yet; call [`start`](Self::start) once the
    /// first frame is scheduled.
    ///
    /// # Errors
    ///
    /// Configuration and gallery errors. Both are fatal at startup.
    pub fn new(config: GaleriaConfig) -> Result<Self> {
        config.validate()?;

        let events = EventBus::new(config.event_buffer_size);
        let photos = GalleryModel::new(GalleryKind::Photos.as_str(), config.photos)?
            .with_events(events.clone());
        let videos = GalleryModel::new(GalleryKind::Videos.as_str(), config.videos)?
            .with_events(events.clone());

        let playback = Arc::new(PlaybackController::new(
            config.media_service,
            config.background_track,
            Some(events.clone()),
        ));
        let navigation = NavigationController::new(playback.clone()).with_events(events.clone());

        info!(
            photos = photos.len(),
            videos = videos.len(),
            links = config.external_links.len(),
            retention = ?config.gallery_retention,
            "Galeria core created"
        );

        Ok(Self {
            ui: Mutex::new(UiState {
                navigation,
                photos,
                videos,
            }),
            playback,
            link_opener: config.link_opener,
            links: config.external_links,
            presentation: config.presentation,
            retention: config.gallery_retention,
            events,
        })
    }

    /// Start background music initialization. Returns immediately.
    pub fn start(&self) -> InitHandle {
        self.playback.initialize()
    }

    pub fn current_screen(&self) -> Screen {
        self.ui.lock().navigation.current_screen()
    }

    pub fn current_photo(&self) -> AssetRef {
        self.ui.lock().photos.current().clone()
    }

    pub fn current_video(&self) -> AssetRef {
        self.ui.lock().videos.current().clone()
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.playback.state()
    }

    /// Why background music is missing, if it is.
    pub fn playback_error(&self) -> Option<PlaybackError> {
        self.playback.last_error()
    }

    /// Navigate to `target`, pausing or resuming music as needed.
    pub fn go_to(&self, target: Screen) {
        let mut ui = self.ui.lock();
        let previous = ui.navigation.go_to(target);

        if self.retention == GalleryRetention::ResetOnLeave && previous != target {
            if let Some(left) = GalleryKind::for_screen(previous) {
                debug!(gallery = %left, "Gallery screen left, resetting cursor");
                ui.gallery_mut(left).reset();
            }
        }
    }

    /// Advance the gallery on screen. `None` on the cover.
    pub fn next(&self) -> Option<AssetRef> {
        let mut ui = self.ui.lock();
        let kind = GalleryKind::for_screen(ui.navigation.current_screen())?;
        Some(ui.gallery_mut(kind).next().clone())
    }

    /// Step back in the gallery on screen. `None` on the cover.
    pub fn previous(&self) -> Option<AssetRef> {
        let mut ui = self.ui.lock();
        let kind = GalleryKind::for_screen(ui.navigation.current_screen())?;
        Some(ui.gallery_mut(kind).previous().clone())
    }

    pub fn links(&self) -> &[ExternalLink] {
        &self.links
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Open the external link `id` in the system browser.
    ///
    /// Has no effect on playback or navigation.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownLink`] if no link has that id
    /// - [`CoreError::CapabilityMissing`] if no link opener is configured
    /// - [`CoreError::Bridge`] if the opener fails
    pub fn open_link(&self, id: &str) -> Result<()> {
        let link = self
            .links
            .iter()
            .find(|link| link.id == id)
            .ok_or_else(|| CoreError::UnknownLink(id.to_string()))?;

        let opener = self
            .link_opener
            .as_ref()
            .ok_or_else(|| CoreError::CapabilityMissing {
                capability: "LinkOpener".to_string(),
                message: "No link opener configured; external links cannot be opened".to_string(),
            })?;

        match opener.open(&link.url) {
            Ok(()) => {
                info!(link = %link.id, "Opened external link");
                self.publish(LinkEvent::Opened {
                    id: link.id.clone(),
                    url: link.url.clone(),
                });
                Ok(())
            }
            Err(err) => {
                warn!(link = %link.id, error = %err, "Failed to open external link");
                self.publish(LinkEvent::Failed {
                    id: link.id.clone(),
                    message: err.to_string(),
                });
                Err(err.into())
            }
        }
    }

    /// Snapshot for rendering one frame.
    pub fn view(&self) -> ViewState {
        let ui = self.ui.lock();
        let screen = ui.navigation.current_screen();
        let gallery = GalleryKind::for_screen(screen).map(|kind| {
            let model = ui.gallery(kind);
            GalleryView {
                gallery: kind,
                asset: model.current().clone(),
                index: model.index(),
                len: model.len(),
            }
        });

        ViewState {
            screen,
            gallery,
            playback: self.playback.state(),
            presentation: self.presentation.clone(),
            links: self.links.clone(),
        }
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    pub fn subscribe(&self) -> EventStream {
        EventStream::new(self.events.subscribe())
    }

    /// Release the background track. Idempotent; also runs on drop.
    pub fn shutdown(&self) {
        self.playback.teardown();
    }

    fn publish(&self, event: LinkEvent) {
        let _ = self.events.emit(CoreEvent::Link(event));
    }
}

impl Drop for GaleriaCore {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for GaleriaCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GaleriaCore")
            .field("screen", &self.current_screen())
            .field("playback", &self.playback_state())
            .field("links", &self.links.len())
            .field("retention", &self.retention)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::{BridgeError, MediaHandle, MediaService};
    use mockall::{mock, predicate::*};

    mock! {
        Media {}

        impl MediaService for Media {
            fn create(&self, asset: &AssetRef) -> bridge_traits::Result<MediaHandle>;
            fn set_looping(&self, handle: MediaHandle, looping: bool) -> bridge_traits::Result<()>;
            fn start(&self, handle: MediaHandle) -> bridge_traits::Result<()>;
            fn pause(&self, handle: MediaHandle) -> bridge_traits::Result<()>;
            fn release(&self, handle: MediaHandle) -> bridge_traits::Result<()>;
        }
    }

    mock! {
        Opener {}

        impl LinkOpener for Opener {
            fn open(&self, url: &str) -> bridge_traits::Result<()>;
        }
    }

    const INSTAGRAM: &str = "https://www.instagram.com/sw0rks_/";

    fn config(opener: Option<MockOpener>) -> GaleriaConfig {
        let mut builder = GaleriaConfig::builder()
            .photos(vec![
                AssetRef::image("fotikoyo"),
                AssetRef::image("arbol"),
                AssetRef::image("campitooo"),
            ])
            .videos(vec![AssetRef::video("dolor"), AssetRef::video("blankito")])
            .background_track(AssetRef::audio("cavadov"))
            .media_service(Arc::new(MockMedia::new()))
            .external_links(vec![ExternalLink::new("instagram", "Instagram", INSTAGRAM)]);
        if let Some(opener) = opener {
            builder = builder.link_opener(Arc::new(opener));
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_next_and_previous_follow_active_screen() {
        let core = GaleriaCore::new(config(None)).unwrap();

        assert_eq!(core.next(), None);
        assert_eq!(core.previous(), None);

        core.go_to(Screen::PhotoGallery);
        assert_eq!(core.next(), Some(AssetRef::image("arbol")));
        assert_eq!(core.current_video(), AssetRef::video("dolor"));

        core.go_to(Screen::VideoGallery);
        assert_eq!(core.previous(), Some(AssetRef::video("blankito")));
    }

    #[test]
    fn test_leaving_gallery_resets_cursor_by_default() {
        let core = GaleriaCore::new(config(None)).unwrap();
        core.go_to(Screen::PhotoGallery);
        core.next();
        core.next();
        assert_eq!(core.current_photo(), AssetRef::image("campitooo"));

        core.go_to(Screen::PhotoGallery);
        assert_eq!(core.current_photo(), AssetRef::image("campitooo"));

        core.go_to(Screen::Cover);
        assert_eq!(core.current_photo(), AssetRef::image("fotikoyo"));
    }

    #[test]
    fn test_hidden_gallery_opens_at_first_asset() {
        let core = GaleriaCore::new(config(None)).unwrap();

        // Stepping on the cover never touches a gallery.
        assert_eq!(core.next(), None);
        core.go_to(Screen::PhotoGallery);
        assert_eq!(core.current_photo(), AssetRef::image("fotikoyo"));

        core.next();
        core.go_to(Screen::VideoGallery);
        core.next();
        core.go_to(Screen::PhotoGallery);
        assert_eq!(core.current_photo(), AssetRef::image("fotikoyo"));
        assert_eq!(core.current_video(), AssetRef::video("dolor"));
    }

    #[test]
    fn test_session_retention_keeps_cursor() {
        let mut config = config(None);
        config.gallery_retention = GalleryRetention::Session;
        let core = GaleriaCore::new(config).unwrap();

        core.go_to(Screen::VideoGallery);
        core.next();
        core.go_to(Screen::Cover);
        assert_eq!(core.current_video(), AssetRef::video("blankito"));
    }

    #[test]
    fn test_open_link_delegates_to_opener() {
        let mut opener = MockOpener::new();
        opener
            .expect_open()
            .with(eq(INSTAGRAM))
            .times(1)
            .returning(|_| Ok(()));

        let core = GaleriaCore::new(config(Some(opener))).unwrap();
        core.open_link("instagram").unwrap();
        assert_eq!(core.current_screen(), Screen::Cover);
        assert_eq!(core.playback_state(), PlaybackState::Uninitialized);
    }

    #[test]
    fn test_open_link_errors() {
        let mut opener = MockOpener::new();
        opener
            .expect_open()
            .returning(|_| Err(BridgeError::NotAvailable("no browser".into())));
        let core = GaleriaCore::new(config(Some(opener))).unwrap();

        assert!(matches!(
            core.open_link("myspace"),
            Err(CoreError::UnknownLink(id)) if id == "myspace"
        ));
        assert!(matches!(
            core.open_link("instagram"),
            Err(CoreError::Bridge(BridgeError::NotAvailable(_)))
        ));
    }

    #[cfg(not(feature = "desktop-shims"))]
    #[test]
    fn test_open_link_without_opener() {
        let core = GaleriaCore::new(config(None)).unwrap();
        assert!(matches!(
            core.open_link("instagram"),
            Err(CoreError::CapabilityMissing { .. })
        ));
    }

    #[test]
    fn test_view_on_cover_has_no_gallery() {
        let core = GaleriaCore::new(config(None)).unwrap();
        let view = core.view();
        assert_eq!(view.screen, Screen::Cover);
        assert!(view.gallery.is_none());
        assert_eq!(view.links.len(), 1);
        assert_eq!(view.playback, PlaybackState::Uninitialized);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = config(None);
        config.photos.clear();
        assert!(matches!(
            GaleriaCore::new(config),
            Err(CoreError::Runtime(core_runtime::Error::InvalidConfiguration(_)))
        ));
    }
}
