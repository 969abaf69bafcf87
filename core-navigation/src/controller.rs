use crate::screen::Screen;
use core_playback::PlaybackControl;
use core_runtime::events::{CoreEvent, EventBus, NavigationEvent};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Screen state machine.
///
/// Every [`go_to`](Self::go_to) updates the screen first and then issues
/// exactly one playback call: `resume` for screens with music, `pause` for
/// the video screen. Any screen may go to any other, including itself.
pub struct NavigationController {
    screen: Screen,
    playback: Arc<dyn PlaybackControl>,
    events: Option<EventBus>,
}

impl NavigationController {
    pub fn new(playback: Arc<dyn PlaybackControl>) -> Self {
        Self {
            screen: Screen::default(),
            playback,
            events: None,
        }
    }

    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    /// Switch to `target`. Returns the screen that was shown before.
    pub fn go_to(&mut self, target: Screen) -> Screen {
        let previous = std::mem::replace(&mut self.screen, target);
        info!(from = %previous, to = %target, "Screen changed");

        if target.wants_music() {
            self.playback.resume();
        } else {
            self.playback.pause();
        }

        if let Some(bus) = &self.events {
            let _ = bus.emit(CoreEvent::Navigation(NavigationEvent::ScreenChanged {
                from: previous.as_str().to_string(),
                to: target.as_str().to_string(),
            }));
        }

        previous
    }
}

impl fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationController")
            .field("screen", &self.screen)
            .field("events", &self.events.is_some())
            .finish()
    }
}
