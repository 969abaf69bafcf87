use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Unknown external link: {0}")]
    UnknownLink(String),

    #[error("Configuration error: {0}")]
    Runtime(#[from] core_runtime::Error),

    #[error("Gallery error: {0}")]
    Gallery(#[from] core_gallery::GalleryError),

    #[error("Playback error: {0}")]
    Playback(#[from] core_playback::PlaybackError),

    #[error("Bridge error: {0}")]
    Bridge(#[from] bridge_traits::BridgeError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
