//! Size profiles and the width/height query-fragment rewrite.

use crate::ImageSize;
use regex::Regex;

/// Pixel dimensions substituted into an image URL's query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    pub width: u32,
    pub height: u32,
}

impl SizeProfile {
    /// The `w=<width>&h=<height>` fragment this profile writes into a URL.
    pub fn query_fragment(&self) -> String {
        format!("w={}&h={}", self.width, self.height)
    }
}

impl ImageSize {
    /// The pixel dimensions requested from the image host for this size.
    pub fn profile(self) -> SizeProfile {
        match self {
            ImageSize::Thumb => SizeProfile {
                width: 400,
                height: 250,
            },
            ImageSize::Medium => SizeProfile {
                width: 800,
                height: 600,
            },
            ImageSize::Large => SizeProfile {
                width: 1200,
                height: 800,
            },
        }
    }
}

/// Query fragment shape shared by the resolver rewrite and the table audit.
pub(crate) const SIZE_FRAGMENT: &str = r"w=\d+&h=\d+";

pub(crate) fn size_fragment_regex() -> Regex {
    Regex::new(SIZE_FRAGMENT).expect("size fragment pattern is valid")
}
