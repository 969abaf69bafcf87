//! Cyclic cursor over an [`AssetList`].

use crate::error::Result;
use crate::list::AssetList;
use core_runtime::events::{CoreEvent, EventBus, GalleryEvent};
use tracing::debug;

/// Gallery cursor that wraps around in both directions.
///
/// `next` and `previous` are total: the index is always in `0..len()` and
/// stepping past either end lands on the other one.
#[derive(Debug, Clone)]
pub struct GalleryModel<T> {
    name: String,
    assets: AssetList<T>,
    index: usize,
    events: Option<EventBus>,
}

impl<T> GalleryModel<T> {
    /// Create a gallery positioned on its first asset.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if `assets` is empty.
    pub fn new(name: impl Into<String>, assets: Vec<T>) -> Result<Self> {
        let name = name.into();
        let assets = AssetList::new(&name, assets)?;
        Ok(Self::from_list(name, assets))
    }

    pub fn from_list(name: impl Into<String>, assets: AssetList<T>) -> Self {
        Self {
            name: name.into(),
            assets,
            index: 0,
            events: None,
        }
    }

    /// Publish index changes and resets on `bus`.
    pub fn with_events(mut self, bus: EventBus) -> Self {
        self.events = Some(bus);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current(&self) -> &T {
        &self.assets[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Advance one asset, wrapping from the last to the first.
    pub fn next(&mut self) -> &T {
        self.move_to((self.index + 1) % self.len());
        self.current()
    }

    /// Go back one asset, wrapping from the first to the last.
    pub fn previous(&mut self) -> &T {
        let len = self.len();
        self.move_to((self.index + len - 1) % len);
        self.current()
    }

    /// Put the cursor back on the first asset, as a freshly created gallery.
    pub fn reset(&mut self) {
        self.index = 0;
        debug!(gallery = %self.name, "Gallery reset");
        self.publish(GalleryEvent::Reset {
            gallery: self.name.clone(),
        });
    }

    fn move_to(&mut self, index: usize) {
        self.index = index;
        debug!(gallery = %self.name, index, len = self.len(), "Gallery index changed");
        self.publish(GalleryEvent::IndexChanged {
            gallery: self.name.clone(),
            index,
            len: self.len(),
        });
    }

    fn publish(&self, event: GalleryEvent) {
        if let Some(bus) = &self.events {
            let _ = bus.emit(CoreEvent::Gallery(event));
        }
    }
}
