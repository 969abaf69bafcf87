use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The gallery cannot be built from the given assets. Fatal at startup.
    #[error("Invalid configuration for gallery '{gallery}': {reason}")]
    InvalidConfiguration { gallery: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GalleryError>;
