//! Resolver modules for category/name to stock-image-URL resolution.

mod size;
mod tables;

pub use self::size::SizeProfile;
pub use self::tables::ImageTables;

use crate::ImageSize;
use regex::Regex;

/// Resolves a resource's category and display name to a stock image URL.
///
/// Owns the injected [`ImageTables`] and the compiled size-fragment
/// pattern. [`resolve`](Self::resolve) is a pure function over that state
/// and never fails; degenerate inputs fall back to the `"other"` category.
pub struct StockImageResolver {
    tables: ImageTables,
    size_fragment: Regex,
}

impl StockImageResolver {
    /// Creates a resolver over the given tables.
    pub fn new(tables: ImageTables) -> Self {
        Self {
            tables,
            size_fragment: size::size_fragment_regex(),
        }
    }

    /// Creates a resolver over the built-in campus tables.
    pub fn with_defaults() -> Self {
        Self::new(ImageTables::campus_defaults())
    }

    /// Resolves a category and optional display name to a stock image URL
    /// at the requested size.
    ///
    /// A named match (first declared key contained in the normalized name)
    /// wins over the category entry; an unknown category falls back to
    /// `"other"`. If the selected URL carries no `w=<digits>&h=<digits>`
    /// fragment, it is returned with its dimensions untouched.
    pub fn resolve(&self, category: Option<&str>, name: Option<&str>, size: ImageSize) -> String {
        self.apply_size(self.select_url(category, name), Some(size))
    }

    /// String-typed variant for callers that hand the size over verbatim.
    ///
    /// An unrecognized size label selects the image normally but skips the
    /// dimension rewrite, as the category/name lookup must never fail on
    /// account of a bad size.
    pub fn resolve_lenient(
        &self,
        category: Option<&str>,
        name: Option<&str>,
        size: &str,
    ) -> String {
        self.apply_size(self.select_url(category, name), ImageSize::parse(size))
    }

    fn select_url(&self, category: Option<&str>, name: Option<&str>) -> &str {
        let name = name.unwrap_or_default().trim().to_lowercase();
        if !name.is_empty() {
            // Declaration order decides when several keys match. Changing
            // this to longest-match would change which image renders for
            // existing resource names.
            for (key, url) in self.tables.named_entries() {
                if name.contains(key) {
                    return url;
                }
            }
        }
        self.tables.category_url(category.unwrap_or_default())
    }

    fn apply_size(&self, url: &str, size: Option<ImageSize>) -> String {
        match size {
            Some(size) if self.size_fragment.is_match(url) => self
                .size_fragment
                .replace(url, size.profile().query_fragment())
                .into_owned(),
            _ => url.to_owned(),
        }
    }
}
