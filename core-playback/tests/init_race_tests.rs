//! Races between background initialization and UI-thread calls

use bridge_traits::{AssetRef, MediaHandle, MediaService, Result};
use core_playback::{PlaybackControl, PlaybackController, PlaybackState};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Create,
    SetLooping(bool),
    Start,
    Pause,
    Release,
}

/// Media service whose `create` blocks until the test opens the gate.
struct GatedMedia {
    handle: MediaHandle,
    gate: Mutex<Receiver<()>>,
    calls: Mutex<Vec<Call>>,
}

impl GatedMedia {
    fn new() -> (Arc<Self>, SyncSender<()>) {
        let (open, gate) = sync_channel(1);
        let media = Arc::new(Self {
            handle: MediaHandle::new(),
            gate: Mutex::new(gate),
            calls: Mutex::new(Vec::new()),
        });
        (media, open)
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl MediaService for GatedMedia {
    fn create(&self, _asset: &AssetRef) -> Result<MediaHandle> {
        let _ = self.gate.lock().unwrap().recv();
        self.record(Call::Create);
        Ok(self.handle)
    }

    fn set_looping(&self, handle: MediaHandle, looping: bool) -> Result<()> {
        assert_eq!(handle, self.handle);
        self.record(Call::SetLooping(looping));
        Ok(())
    }

    fn start(&self, _handle: MediaHandle) -> Result<()> {
        self.record(Call::Start);
        Ok(())
    }

    fn pause(&self, _handle: MediaHandle) -> Result<()> {
        self.record(Call::Pause);
        Ok(())
    }

    fn release(&self, _handle: MediaHandle) -> Result<()> {
        self.record(Call::Release);
        Ok(())
    }
}

fn controller(media: &Arc<GatedMedia>) -> PlaybackController {
    let service: Arc<dyn MediaService> = media.clone();
    PlaybackController::new(service, AssetRef::audio("cavadov"), None)
}

#[tokio::test]
async fn test_calls_before_init_are_inert() {
    let (media, open) = GatedMedia::new();
    let controller = controller(&media);
    let init = controller.initialize();

    controller.resume();
    assert_eq!(controller.state(), PlaybackState::Uninitialized);
    assert!(media.calls().is_empty());

    open.send(()).unwrap();
    init.wait().await;

    assert_eq!(controller.state(), PlaybackState::Playing);
    assert_eq!(
        media.calls(),
        vec![Call::Create, Call::SetLooping(true), Call::Start]
    );
}

#[tokio::test]
async fn test_pause_during_init_applies_after_start() {
    let (media, open) = GatedMedia::new();
    let controller = controller(&media);
    let init = controller.initialize();

    // Navigation to the video screen while the player is still being built.
    PlaybackControl::pause(&controller);
    open.send(()).unwrap();
    init.wait().await;

    assert_eq!(controller.state(), PlaybackState::Paused);
    assert_eq!(
        media.calls(),
        vec![Call::Create, Call::SetLooping(true), Call::Start, Call::Pause]
    );
}

#[tokio::test]
async fn test_latest_intent_wins() {
    let (media, open) = GatedMedia::new();
    let controller = controller(&media);
    let init = controller.initialize();

    controller.pause();
    controller.resume();
    open.send(()).unwrap();
    init.wait().await;

    assert_eq!(controller.state(), PlaybackState::Playing);
    assert!(!media.calls().contains(&Call::Pause));
}

#[tokio::test]
async fn test_teardown_during_init_releases_without_start() {
    let (media, open) = GatedMedia::new();
    let controller = controller(&media);
    let init = controller.initialize();

    controller.teardown();
    assert_eq!(controller.state(), PlaybackState::Released);

    open.send(()).unwrap();
    init.wait().await;

    assert_eq!(controller.state(), PlaybackState::Released);
    assert_eq!(media.calls(), vec![Call::Create, Call::Release]);
}

#[test]
fn test_video_round_trip_without_runtime() {
    let (media, open) = GatedMedia::new();
    let controller = controller(&media);
    open.send(()).unwrap();
    controller.initialize().join();

    controller.pause();
    controller.resume();
    controller.teardown();
    controller.teardown();

    assert_eq!(
        media.calls(),
        vec![
            Call::Create,
            Call::SetLooping(true),
            Call::Start,
            Call::Pause,
            Call::Start,
            Call::Release,
        ]
    );
}
