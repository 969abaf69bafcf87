use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Startup cannot continue: the bundled assets do not describe a usable
    /// presentation (e.g. an empty gallery).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },

    #[error("Invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
