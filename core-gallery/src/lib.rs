//! # Gallery Models
//!
//! Immutable asset lists and the cyclic cursor each gallery screen reads.
//!
//! ```
//! use core_gallery::GalleryModel;
//!
//! let mut photos = GalleryModel::new("photos", vec!["perrito", "palomas", "bici"])?;
//! assert_eq!(*photos.previous(), "bici");
//! assert_eq!(*photos.next(), "perrito");
//! # Ok::<(), core_gallery::GalleryError>(())
//! ```

pub mod error;
pub mod list;
pub mod model;

pub use error::{GalleryError, Result};
pub use list::AssetList;
pub use model::GalleryModel;
