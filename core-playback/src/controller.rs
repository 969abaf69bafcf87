//! # Background Track Controller
//!
//! Single owner of the looping background track.
//!
//! ## Lifecycle
//!
//! - [`PlaybackController::initialize`] creates the platform player off the
//!   calling thread (a tokio blocking worker when a runtime is current, a named
//!   OS thread otherwise), enables looping and starts it.
//! - `pause`/`resume` are safe at any time. Before the player exists they only
//!   record the latest intent, which is applied once playback has started.
//! - [`PlaybackController::teardown`] releases the player exactly once. It also
//!   runs on drop.
//!
//! Platform failures never escape: they are logged, published as
//! `PlaybackEvent::Unavailable`, and the app carries on without music.

use crate::error::PlaybackError;
use crate::state::PlaybackState;
use crate::traits::PlaybackControl;
use bridge_traits::{AssetRef, MediaHandle, MediaService};
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use core_runtime::logging::strip_path;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

const INIT_THREAD_NAME: &str = "galeria-audio-init";

/// Owns the lifecycle of the one background audio track.
pub struct PlaybackController {
    shared: Arc<Shared>,
}

struct Shared {
    service: Arc<dyn MediaService>,
    track: AssetRef,
    events: Option<EventBus>,
    inner: Mutex<Inner>,
    init_done: watch::Sender<bool>,
}

#[derive(Default)]
struct Inner {
    state: PlaybackState,
    /// Present once the platform player has been created and configured.
    handle: Option<MediaHandle>,
    init_requested: bool,
    /// A pause arrived before playback started.
    pending_pause: bool,
    last_error: Option<PlaybackError>,
}

impl PlaybackController {
    pub fn new(service: Arc<dyn MediaService>, track: AssetRef, events: Option<EventBus>) -> Self {
        let (init_done, _) = watch::channel(false);
        Self {
            shared: Arc::new(Shared {
                service,
                track,
                events,
                inner: Mutex::new(Inner::default()),
                init_done,
            }),
        }
    }

    /// Create and start the player in the background.
    ///
    /// Returns immediately. Calling it again (or after teardown) does not
    /// create a second player; the returned handle tracks the first attempt.
    pub fn initialize(&self) -> InitHandle {
        let handle = InitHandle {
            done: self.shared.init_done.subscribe(),
        };

        {
            let mut inner = self.shared.inner.lock();
            if inner.init_requested {
                return handle;
            }
            inner.init_requested = true;

            if inner.state.is_released() {
                self.shared.init_done.send_replace(true);
                return handle;
            }
        }

        let shared = Arc::clone(&self.shared);
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                debug!("Initializing background music on blocking worker");
                drop(runtime.spawn_blocking(move || shared.run_init()));
            }
            Err(_) => {
                debug!("No runtime available, initializing background music on a thread");
                let spawned = std::thread::Builder::new()
                    .name(INIT_THREAD_NAME.to_string())
                    .spawn(move || shared.run_init());

                if let Err(err) = spawned {
                    let mut inner = self.shared.inner.lock();
                    self.shared.mark_unavailable(
                        &mut inner,
                        PlaybackError::MediaUnavailable(format!(
                            "could not spawn init worker: {}",
                            err
                        )),
                    );
                    drop(inner);
                    self.shared.init_done.send_replace(true);
                }
            }
        }

        handle
    }

    /// Pause the track if it is playing.
    ///
    /// Before playback has started the request is remembered and applied as
    /// soon as initialization starts the track.
    pub fn pause(&self) {
        let mut inner = self.shared.inner.lock();
        match inner.state {
            PlaybackState::Playing => self.shared.pause_locked(&mut inner),
            PlaybackState::Uninitialized => {
                inner.pending_pause = true;
                debug!("Pause requested before playback started");
            }
            PlaybackState::Paused | PlaybackState::Released => {}
        }
    }

    /// Resume the track if it is paused, or start it if initialization left a
    /// ready but stopped player behind.
    pub fn resume(&self) {
        let mut inner = self.shared.inner.lock();
        match inner.state {
            PlaybackState::Paused => self.shared.start_locked(&mut inner, StartKind::Resume),
            PlaybackState::Uninitialized => {
                inner.pending_pause = false;
                if inner.handle.is_some() {
                    self.shared.start_locked(&mut inner, StartKind::First);
                }
            }
            PlaybackState::Playing | PlaybackState::Released => {}
        }
    }

    /// Release the platform player. Idempotent.
    pub fn teardown(&self) {
        self.shared.teardown();
    }

    pub fn state(&self) -> PlaybackState {
        self.shared.inner.lock().state
    }

    /// Most recent platform failure, if any.
    pub fn last_error(&self) -> Option<PlaybackError> {
        self.shared.inner.lock().last_error.clone()
    }
}

impl PlaybackControl for PlaybackController {
    fn pause(&self) {
        PlaybackController::pause(self);
    }

    fn resume(&self) {
        PlaybackController::resume(self);
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.shared.teardown();
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.inner.lock();
        f.debug_struct("PlaybackController")
            .field("track", &self.shared.track)
            .field("state", &inner.state)
            .field("handle", &inner.handle)
            .field("pending_pause", &inner.pending_pause)
            .finish()
    }
}

#[derive(Clone, Copy)]
enum StartKind {
    First,
    Resume,
}

impl Shared {
    fn track_name(&self) -> String {
        strip_path(self.track.id()).to_string()
    }

    fn publish(&self, event: PlaybackEvent) {
        if let Some(bus) = &self.events {
            let _ = bus.emit(CoreEvent::Playback(event));
        }
    }

    fn run_init(&self) {
        let _done = InitCompletion(&self.init_done);

        // create() may block on the platform, so it runs without the lock.
        let created = self.service.create(&self.track);
        let mut inner = self.inner.lock();

        let handle = match created {
            Ok(handle) => handle,
            Err(err) => {
                if !inner.state.is_released() {
                    self.mark_unavailable(&mut inner, err.into());
                }
                return;
            }
        };

        if inner.state.is_released() {
            debug!(%handle, "Torn down during initialization, releasing new player");
            self.release_quietly(handle);
            return;
        }

        if let Err(err) = self.service.set_looping(handle, true) {
            self.release_quietly(handle);
            self.mark_unavailable(&mut inner, err.into());
            return;
        }

        inner.handle = Some(handle);
        self.start_locked(&mut inner, StartKind::First);

        if inner.state.is_playing() && std::mem::take(&mut inner.pending_pause) {
            debug!("Applying pause requested during initialization");
            self.pause_locked(&mut inner);
        }
    }

    fn start_locked(&self, inner: &mut Inner, kind: StartKind) {
        let Some(handle) = inner.handle else {
            return;
        };

        match self.service.start(handle) {
            Ok(()) => {
                inner.state = PlaybackState::Playing;
                let track = self.track_name();
                match kind {
                    StartKind::First => {
                        info!(track = %track, "Background music started");
                        self.publish(PlaybackEvent::Started { track });
                    }
                    StartKind::Resume => {
                        debug!(track = %track, "Background music resumed");
                        self.publish(PlaybackEvent::Resumed { track });
                    }
                }
            }
            Err(err) => self.mark_unavailable(inner, err.into()),
        }
    }

    fn pause_locked(&self, inner: &mut Inner) {
        let Some(handle) = inner.handle else {
            return;
        };

        match self.service.pause(handle) {
            Ok(()) => {
                inner.state = PlaybackState::Paused;
                let track = self.track_name();
                debug!(track = %track, "Background music paused");
                self.publish(PlaybackEvent::Paused { track });
            }
            Err(err) => warn!(error = %err, "Failed to pause background music"),
        }
    }

    fn teardown(&self) {
        let mut inner = self.inner.lock();
        if inner.state.is_released() {
            return;
        }

        inner.state = PlaybackState::Released;
        inner.pending_pause = false;
        if let Some(handle) = inner.handle.take() {
            self.release_quietly(handle);
        }

        let track = self.track_name();
        info!(track = %track, "Background music released");
        self.publish(PlaybackEvent::Released { track });
    }

    fn release_quietly(&self, handle: MediaHandle) {
        if let Err(err) = self.service.release(handle) {
            warn!(%handle, error = %err, "Failed to release media player");
        }
    }

    fn mark_unavailable(&self, inner: &mut Inner, err: PlaybackError) {
        let track = self.track_name();
        warn!(track = %track, error = %err, "Continuing without background music");
        self.publish(PlaybackEvent::Unavailable {
            track,
            message: err.to_string(),
        });
        inner.last_error = Some(err);
    }
}

/// Marks initialization finished even if the worker unwinds.
struct InitCompletion<'a>(&'a watch::Sender<bool>);

impl Drop for InitCompletion<'_> {
    fn drop(&mut self) {
        self.0.send_replace(true);
    }
}

/// Completion signal of [`PlaybackController::initialize`].
///
/// Dropping it does not cancel anything.
#[derive(Debug, Clone)]
pub struct InitHandle {
    done: watch::Receiver<bool>,
}

impl InitHandle {
    pub fn is_finished(&self) -> bool {
        *self.done.borrow()
    }

    /// Wait until the background initialization has finished, successfully
    /// or not.
    pub async fn wait(mut self) {
        let _ = self.done.wait_for(|done| *done).await;
    }

    /// Blocking variant of [`wait`](Self::wait) for hosts without a runtime.
    pub fn join(self) {
        futures::executor::block_on(self.wait());
    }
}
