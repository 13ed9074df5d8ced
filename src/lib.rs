//! # resource-images
//!
//! Stock image resolution for campus resource listings.
//!
//! Maps a bookable resource's category and display name to a representative
//! stock photograph URL at a requested size. Named matches (substring
//! containment, first declared entry wins) take precedence over the
//! category fallback; unknown or absent categories resolve to `"other"`.
//! Resolution never fails: every input yields a well-formed URL.
//!
//! Resources with an uploaded image of their own should use it verbatim and
//! skip the resolver entirely; that decision belongs to the host layer.
//!
//! ## Example
//!
//! ```
//! use resource_images::{ImageSize, StockImageResolver};
//!
//! let resolver = StockImageResolver::with_defaults();
//! let url = resolver.resolve(
//!     Some("room"),
//!     Some("Wells Library Study Room 2"),
//!     ImageSize::Medium,
//! );
//! assert!(url.contains("w=800&h=600"));
//! ```

pub mod error;
pub mod resolver;

pub use error::{Error, Result};
pub use resolver::{ImageTables, SizeProfile, StockImageResolver};

/// Size variant requested from the image host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    /// List thumbnails.
    Thumb,
    /// Card and grid views.
    Medium,
    /// Detail and carousel views.
    #[default]
    Large,
}

impl ImageSize {
    /// Parses a size label (case-insensitive, whitespace-trimmed).
    ///
    /// Returns `None` for unrecognized labels; the resolver treats those as
    /// "leave the URL's dimensions alone" rather than as an error.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "thumb" => Some(Self::Thumb),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }
}
