//! Typed events published by the gallery core.
//!
//! Navigation, the gallery models, playback and link handling each publish
//! into one [`EventBus`]; renderers and debug overlays subscribe. A lagging
//! subscriber gets `RecvError::Lagged(n)` and should redraw from the current
//! view state. Publishers ignore `SendError`, since an empty audience is normal.
//!
//! ```rust
//! use core_runtime::events::{CoreEvent, EventBus, NavigationEvent};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let bus = EventBus::new(16);
//! let mut rx = bus.subscribe();
//!
//! bus.emit(CoreEvent::Navigation(NavigationEvent::ScreenChanged {
//!     from: "cover".to_string(),
//!     to: "photo_gallery".to_string(),
//! }))
//! .ok();
//!
//! assert_eq!(rx.recv().await.unwrap().description(), "Screen changed");
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tokio::sync::broadcast;

pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 64;

/// Top-level event enum encompassing all event categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum CoreEvent {
    Navigation(NavigationEvent),
    Gallery(GalleryEvent),
    Playback(PlaybackEvent),
    Link(LinkEvent),
}

impl CoreEvent {
    /// Short label for logs and debug overlays.
    pub fn description(&self) -> &str {
        match self {
            CoreEvent::Navigation(e) => e.description(),
            CoreEvent::Gallery(e) => e.description(),
            CoreEvent::Playback(e) => e.description(),
            CoreEvent::Link(e) => e.description(),
        }
    }

    pub fn severity(&self) -> EventSeverity {
        match self {
            CoreEvent::Link(LinkEvent::Failed { .. }) => EventSeverity::Error,
            CoreEvent::Playback(PlaybackEvent::Unavailable { .. }) => EventSeverity::Warning,
            CoreEvent::Navigation(_) => EventSeverity::Info,
            CoreEvent::Link(LinkEvent::Opened { .. }) => EventSeverity::Info,
            _ => EventSeverity::Debug,
        }
    }
}

/// Coarse importance, for overlays that only show warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventSeverity {
    Debug,
    Info,
    Warning,
    Error,
}

/// Events emitted by the navigation state machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum NavigationEvent {
    /// The active screen changed. Screen names are the stable identifiers
    /// `cover`, `photo_gallery` and `video_gallery`.
    ScreenChanged { from: String, to: String },
}

impl NavigationEvent {
    fn description(&self) -> &str {
        match self {
            NavigationEvent::ScreenChanged { .. } => "Screen changed",
        }
    }
}

/// Events emitted by gallery models.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum GalleryEvent {
    /// The cursor moved.
    IndexChanged {
        /// Gallery name (`photos` or `videos`).
        gallery: String,
        index: usize,
        len: usize,
    },
    /// The gallery was recreated and its cursor is back at the first asset.
    Reset { gallery: String },
}

impl GalleryEvent {
    fn description(&self) -> &str {
        match self {
            GalleryEvent::IndexChanged { .. } => "Gallery index changed",
            GalleryEvent::Reset { .. } => "Gallery reset",
        }
    }
}

/// Events related to the background music track.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum PlaybackEvent {
    /// Initialization finished and the track started looping.
    Started { track: String },
    Paused { track: String },
    Resumed { track: String },
    /// The platform resource was released. Terminal.
    Released { track: String },
    /// The platform refused to create or start the track; the app continues
    /// without music.
    Unavailable { track: String, message: String },
}

impl PlaybackEvent {
    fn description(&self) -> &str {
        match self {
            PlaybackEvent::Started { .. } => "Background music started",
            PlaybackEvent::Paused { .. } => "Background music paused",
            PlaybackEvent::Resumed { .. } => "Background music resumed",
            PlaybackEvent::Released { .. } => "Background music released",
            PlaybackEvent::Unavailable { .. } => "Background music unavailable",
        }
    }
}

/// Events emitted when the cover screen opens an external link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "event")]
pub enum LinkEvent {
    Opened { id: String, url: String },
    Failed { id: String, message: String },
}

impl LinkEvent {
    fn description(&self) -> &str {
        match self {
            LinkEvent::Opened { .. } => "External link opened",
            LinkEvent::Failed { .. } => "External link failed",
        }
    }
}

/// Broadcast channel shared by every publisher in the core.
///
/// Clones publish into the same channel.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// # Panics
    ///
    /// On a zero `capacity`. `GaleriaConfig` rejects that before a bus is built.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Number of receivers reached; an error when nobody is subscribed.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Past events are not replayed.
    pub fn subscribe(&self) -> Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

type EventFilter = Box<dyn Fn(&CoreEvent) -> bool + Send + Sync>;

/// Receiver that drops events not matching a predicate.
///
/// ```rust
/// use core_runtime::events::{CoreEvent, EventBus, EventStream};
///
/// let event_bus = EventBus::new(16);
/// let playback_only = EventStream::new(event_bus.subscribe())
///     .filter(|event| matches!(event, CoreEvent::Playback(_)));
/// ```
pub struct EventStream {
    receiver: Receiver<CoreEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    pub fn new(receiver: Receiver<CoreEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    /// Only events matching `predicate` will be returned by `recv()`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&CoreEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    fn accepts(&self, event: &CoreEvent) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(event))
    }

    /// Wait for the next event that passes the filter.
    ///
    /// Lag and closure surface as the underlying [`RecvError`].
    pub async fn recv(&mut self) -> Result<CoreEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Next queued event that passes the filter, without waiting.
    ///
    /// `None` once the queue is drained. Renderers poll this once per frame.
    pub fn try_recv(&mut self) -> Option<Result<CoreEvent, RecvError>> {
        use broadcast::error::TryRecvError;

        loop {
            let event = match self.receiver.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Lagged(n)) => return Some(Err(RecvError::Lagged(n))),
                Err(TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            };
            if self.accepts(&event) {
                return Some(Ok(event));
            }
        }
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_changed(from: &str, to: &str) -> CoreEvent {
        CoreEvent::Navigation(NavigationEvent::ScreenChanged {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn test_event_bus_subscription() {
        let bus = EventBus::new(10);
        assert_eq!(bus.subscriber_count(), 0);
        let _sub1 = bus.subscribe();
        let _sub2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[tokio::test]
    async fn test_event_emission_no_subscribers() {
        let bus = EventBus::new(10);
        assert!(bus.emit(screen_changed("cover", "video_gallery")).is_err());
    }

    #[tokio::test]
    async fn test_multiple_subscribers_receive_same_event() {
        let bus = EventBus::new(10);
        let mut sub1 = bus.subscribe();
        let mut sub2 = bus.subscribe();

        let event = CoreEvent::Gallery(GalleryEvent::IndexChanged {
            gallery: "photos".to_string(),
            index: 2,
            len: 22,
        });
        assert_eq!(bus.emit(event.clone()).unwrap(), 2);

        assert_eq!(sub1.recv().await.unwrap(), event);
        assert_eq!(sub2.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_event_stream_with_filter() {
        let bus = EventBus::new(10);
        let mut stream = EventStream::new(bus.subscribe())
            .filter(|event| matches!(event, CoreEvent::Playback(_)));

        bus.emit(screen_changed("cover", "video_gallery")).ok();
        let paused = CoreEvent::Playback(PlaybackEvent::Paused {
            track: "audio:cavadov".to_string(),
        });
        bus.emit(paused.clone()).ok();

        assert_eq!(stream.recv().await.unwrap(), paused);
    }

    #[tokio::test]
    async fn test_lagged_subscriber() {
        let bus = EventBus::new(2);
        let mut sub = bus.subscribe();

        for i in 0..5 {
            bus.emit(CoreEvent::Gallery(GalleryEvent::IndexChanged {
                gallery: "photos".to_string(),
                index: i,
                len: 5,
            }))
            .ok();
        }

        assert!(matches!(sub.recv().await, Err(RecvError::Lagged(_))));
    }

    #[test]
    fn test_event_severity() {
        let unavailable = CoreEvent::Playback(PlaybackEvent::Unavailable {
            track: "audio:cavadov".to_string(),
            message: "no audio device".to_string(),
        });
        assert_eq!(unavailable.severity(), EventSeverity::Warning);

        let failed = CoreEvent::Link(LinkEvent::Failed {
            id: "instagram".to_string(),
            message: "no launcher".to_string(),
        });
        assert_eq!(failed.severity(), EventSeverity::Error);

        assert_eq!(
            screen_changed("cover", "photo_gallery").severity(),
            EventSeverity::Info
        );

        let reset = CoreEvent::Gallery(GalleryEvent::Reset {
            gallery: "videos".to_string(),
        });
        assert_eq!(reset.severity(), EventSeverity::Debug);
    }

    #[test]
    fn test_try_recv_skips_filtered_events() {
        let bus = EventBus::new(10);
        let mut stream = EventStream::new(bus.subscribe())
            .filter(|event| matches!(event, CoreEvent::Link(_)));

        assert!(stream.try_recv().is_none());

        bus.emit(screen_changed("cover", "photo_gallery")).ok();
        assert!(stream.try_recv().is_none());

        let opened = CoreEvent::Link(LinkEvent::Opened {
            id: "linkedin".to_string(),
            url: "https://www.linkedin.com/".to_string(),
        });
        bus.emit(opened.clone()).ok();
        assert_eq!(stream.try_recv().unwrap().unwrap(), opened);
    }

    #[test]
    fn test_event_serialization() {
        let event = screen_changed("cover", "video_gallery");
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Navigation\""));
        assert!(json.contains("\"event\":\"ScreenChanged\""));

        let back: CoreEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
