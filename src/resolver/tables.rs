//! Immutable lookup tables mapping resource names and categories to URLs.

use std::collections::{HashMap, HashSet};

use super::size;
use crate::error::{Error, Result};

/// Category every unresolvable input falls back to.
const OTHER_CATEGORY: &str = "other";

// Specific images for named resources; provides variety within categories.
// Order matters: the first key contained in a resource's name wins.
const NAMED_RESOURCE_IMAGES: &[(&str, &str)] = &[
    // AI & computing labs
    ("luddy ai lab", "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=1200&h=800&fit=crop&q=80"),
    ("vr/ar studio", "https://images.unsplash.com/photo-1622979135225-d2ba269cf1ac?w=1200&h=800&fit=crop&q=80"),
    ("wright computer lab", "https://images.unsplash.com/photo-1547658719-da2b51169166?w=1200&h=800&fit=crop&q=80"),
    // Science labs
    ("msb-ii molecular biology lab", "https://images.unsplash.com/photo-1582719471384-894fbb16e074?w=1200&h=800&fit=crop&q=80"),
    ("microscopy station", "https://images.unsplash.com/photo-1530497610245-94d3c16cda28?w=1200&h=800&fit=crop&q=80"),
    ("spectroscopy instrument", "https://images.unsplash.com/photo-1581093588401-fbb62a02f120?w=1200&h=800&fit=crop&q=80"),
    // Study rooms & spaces
    ("wells library study room", "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=1200&h=800&fit=crop&q=80"),
    ("wells library quiet pod", "https://images.unsplash.com/photo-1618609378039-b572f64c5b42?w=1200&h=800&fit=crop&q=80"),
    ("luddy collaboration pod", "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&h=800&fit=crop&q=80"),
    ("kelley collaboration room", "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=1200&h=800&fit=crop&q=80"),
    ("kelley team study pod", "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=1200&h=800&fit=crop&q=80"),
    ("kelley interview room", "https://images.unsplash.com/photo-1573497019940-1c28c88b4f3e?w=1200&h=800&fit=crop&q=80"),
    // Event spaces & facilities
    ("imu solarium", "https://images.unsplash.com/photo-1511578314322-379afb476865?w=1200&h=800&fit=crop&q=80"),
    ("imu georgian room", "https://images.unsplash.com/photo-1519167758481-83f29da8c2b5?w=1200&h=800&fit=crop&q=80"),
    ("imu student org meeting room", "https://images.unsplash.com/photo-1556761175-4b46a572b786?w=1200&h=800&fit=crop&q=80"),
    ("neal-marshall multipurpose", "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=1200&h=800&fit=crop&q=80"),
    ("cultural library study room", "https://images.unsplash.com/photo-1521587760476-6c12a4b040da?w=1200&h=800&fit=crop&q=80"),
    ("media presentation lounge", "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=1200&h=800&fit=crop&q=80"),
    // Recreation & sports
    ("srsc basketball court", "https://images.unsplash.com/photo-1546519638-68e109498ffc?w=1200&h=800&fit=crop&q=80"),
    ("indoor track", "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=1200&h=800&fit=crop&q=80"),
    // Music & arts
    ("music practice room", "https://images.unsplash.com/photo-1520523839897-bd0b52f945a0?w=1200&h=800&fit=crop&q=80"),
    ("recording studio", "https://images.unsplash.com/photo-1598488035139-bdbb2231ce04?w=1200&h=800&fit=crop&q=80"),
    ("music rehearsal hall", "https://images.unsplash.com/photo-1507838153414-b4b713384a76?w=1200&h=800&fit=crop&q=80"),
    // Seminar & academic rooms
    ("wright seminar room", "https://images.unsplash.com/photo-1562774053-701939374585?w=1200&h=800&fit=crop&q=80"),
    // Equipment
    ("projector", "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=1200&h=800&fit=crop&q=80"),
    ("laptop", "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=1200&h=800&fit=crop&q=80"),
    ("video camera", "https://images.unsplash.com/photo-1502920917128-1aa500764cbd?w=1200&h=800&fit=crop&q=80"),
    ("podcast recording kit", "https://images.unsplash.com/photo-1589903308904-1010c2294adc?w=1200&h=800&fit=crop&q=80"),
    ("portable whiteboard", "https://images.unsplash.com/photo-1606326608606-aa0b62935f2b?w=1200&h=800&fit=crop&q=80"),
];

// Per-category fallbacks for resources without a named match.
const CATEGORY_IMAGES: &[(&str, &str)] = &[
    ("room", "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&h=800&fit=crop&q=80"),
    ("equipment", "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=1200&h=800&fit=crop&q=80"),
    ("lab", "https://images.unsplash.com/photo-1532187863486-abf9dbad1b69?w=1200&h=800&fit=crop&q=80"),
    ("facility", "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=1200&h=800&fit=crop&q=80"),
    ("space", "https://images.unsplash.com/photo-1497366811353-6870744d04b2?w=1200&h=800&fit=crop&q=80"),
    ("other", "https://images.unsplash.com/photo-1497366754035-f200968a6e72?w=1200&h=800&fit=crop&q=80"),
];

/// The two lookup tables behind a [`StockImageResolver`](crate::StockImageResolver).
///
/// Both tables are fixed at construction; there is no mutation API. Tests
/// inject their own fixtures through [`ImageTables::new`] instead of
/// patching process-wide state.
pub struct ImageTables {
    named: Vec<(String, String)>,
    categories: HashMap<String, String>,
}

impl ImageTables {
    /// Builds tables from explicit entries. Keys are lowercased and
    /// trimmed; named entries keep their declaration order.
    pub fn new(named: &[(&str, &str)], categories: &[(&str, &str)]) -> Self {
        Self {
            named: named
                .iter()
                .map(|(key, url)| (key.trim().to_lowercase(), (*url).to_owned()))
                .collect(),
            categories: categories
                .iter()
                .map(|(key, url)| (key.trim().to_lowercase(), (*url).to_owned()))
                .collect(),
        }
    }

    /// The built-in tables for the campus resource hub.
    pub fn campus_defaults() -> Self {
        Self::new(NAMED_RESOURCE_IMAGES, CATEGORY_IMAGES)
    }

    /// Named entries in declaration order.
    pub fn named_entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.named.iter().map(|(key, url)| (key.as_str(), url.as_str()))
    }

    /// Category entries, in no particular order.
    pub fn category_entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.categories
            .iter()
            .map(|(key, url)| (key.as_str(), url.as_str()))
    }

    /// Category lookup with the `"other"` fallback.
    ///
    /// Returns an empty string only when the table itself lacks an
    /// `"other"` entry, which [`validate`](Self::validate) rejects.
    pub(crate) fn category_url(&self, category: &str) -> &str {
        let normalized = category.trim().to_lowercase();
        let entry = if normalized.is_empty() {
            None
        } else {
            self.categories.get(&normalized)
        };
        entry
            .or_else(|| self.categories.get(OTHER_CATEGORY))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Audits the tables: every URL must carry a `w=<digits>&h=<digits>`
    /// fragment, the `"other"` fallback must exist, and named keys must be
    /// unique.
    ///
    /// Resolution stays fail-soft regardless; run this at startup to fail
    /// loud on bad configuration data instead of serving unsized images.
    pub fn validate(&self) -> Result<()> {
        if !self.categories.contains_key(OTHER_CATEGORY) {
            return Err(Error::MissingOtherFallback);
        }
        let fragment = size::size_fragment_regex();
        let mut seen = HashSet::new();
        for (key, url) in &self.named {
            if !seen.insert(key.as_str()) {
                return Err(Error::DuplicateMatchKey(key.clone()));
            }
            if !fragment.is_match(url) {
                return Err(Error::MissingSizeFragment {
                    key: key.clone(),
                    url: url.clone(),
                });
            }
        }
        for (key, url) in &self.categories {
            if !fragment.is_match(url) {
                return Err(Error::MissingSizeFragment {
                    key: key.clone(),
                    url: url.clone(),
                });
            }
        }
        Ok(())
    }
}
