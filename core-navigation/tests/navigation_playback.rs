//! Navigation driving a real playback controller

use bridge_traits::{AssetRef, MediaHandle, MediaService, Result};
use core_navigation::{NavigationController, Screen};
use core_playback::{PlaybackController, PlaybackState};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CountingMedia {
    starts: Mutex<u32>,
    pauses: Mutex<u32>,
    releases: Mutex<u32>,
}

impl MediaService for CountingMedia {
    fn create(&self, _asset: &AssetRef) -> Result<MediaHandle> {
        Ok(MediaHandle::new())
    }

    fn set_looping(&self, _handle: MediaHandle, _looping: bool) -> Result<()> {
        Ok(())
    }

    fn start(&self, _handle: MediaHandle) -> Result<()> {
        *self.starts.lock().unwrap() += 1;
        Ok(())
    }

    fn pause(&self, _handle: MediaHandle) -> Result<()> {
        *self.pauses.lock().unwrap() += 1;
        Ok(())
    }

    fn release(&self, _handle: MediaHandle) -> Result<()> {
        *self.releases.lock().unwrap() += 1;
        Ok(())
    }
}

#[tokio::test]
async fn test_app_session_scenario() {
    let media = Arc::new(CountingMedia::default());
    let playback = Arc::new(PlaybackController::new(
        media.clone(),
        AssetRef::audio("cavadov"),
        None,
    ));
    let mut nav = NavigationController::new(playback.clone());

    assert_eq!(nav.current_screen(), Screen::Cover);
    assert_eq!(playback.state(), PlaybackState::Uninitialized);

    playback.initialize().wait().await;
    assert_eq!(playback.state(), PlaybackState::Playing);

    nav.go_to(Screen::VideoGallery);
    assert_eq!(playback.state(), PlaybackState::Paused);

    nav.go_to(Screen::Cover);
    assert_eq!(playback.state(), PlaybackState::Playing);

    playback.teardown();
    assert_eq!(playback.state(), PlaybackState::Released);

    assert_eq!(*media.starts.lock().unwrap(), 2);
    assert_eq!(*media.pauses.lock().unwrap(), 1);
    assert_eq!(*media.releases.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_photo_gallery_keeps_music_playing() {
    let media = Arc::new(CountingMedia::default());
    let playback = Arc::new(PlaybackController::new(
        media.clone(),
        AssetRef::audio("cavadov"),
        None,
    ));
    let mut nav = NavigationController::new(playback.clone());
    playback.initialize().wait().await;

    nav.go_to(Screen::PhotoGallery);
    nav.go_to(Screen::Cover);

    assert_eq!(playback.state(), PlaybackState::Playing);
    assert_eq!(*media.starts.lock().unwrap(), 1);
    assert_eq!(*media.pauses.lock().unwrap(), 0);
}
