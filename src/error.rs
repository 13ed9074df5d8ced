//! Error types for resource-images.

use thiserror::Error;

/// Result type for table-validation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the strict table audit.
///
/// The resolve path never returns these: lookup failures degrade to the
/// `"other"` fallback and malformed URLs pass through unmodified. Only
/// [`ImageTables::validate`](crate::ImageTables::validate) surfaces them.
#[derive(Error, Debug)]
pub enum Error {
    /// A configured URL has no `w=<digits>&h=<digits>` fragment to rewrite.
    #[error("image URL for {key:?} has no size fragment: {url}")]
    MissingSizeFragment { key: String, url: String },

    /// The category table is missing its `"other"` fallback entry.
    #[error("category table has no \"other\" fallback entry")]
    MissingOtherFallback,

    /// The same match key appears twice in the named table; declaration
    /// order would silently shadow the later entry.
    #[error("duplicate match key: {0}")]
    DuplicateMatchKey(String),
}
