//! Bundled asset handles.
//!
//! The core only ever sees assets as opaque references. What an id means (an
//! Android resource name, a path inside an app bundle, a key into an embedded
//! archive) is up to the host that resolves it for rendering or playback.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of bundled resource an [`AssetRef`] points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
        };
        f.write_str(name)
    }
}

/// Opaque reference to a bundled resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetRef {
    kind: AssetKind,
    id: String,
}

impl AssetRef {
    pub fn new(kind: AssetKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn image(id: impl Into<String>) -> Self {
        Self::new(AssetKind::Image, id)
    }

    pub fn video(id: impl Into<String>) -> Self {
        Self::new(AssetKind::Video, id)
    }

    pub fn audio(id: impl Into<String>) -> Self {
        Self::new(AssetKind::Audio, id)
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    /// Host-specific identifier of the resource.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for AssetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
