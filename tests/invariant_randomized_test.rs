use regex::Regex;
use resource_images::{ImageTables, StockImageResolver};
use std::collections::HashSet;

#[derive(Debug, Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        pool[(self.next_u64() % pool.len() as u64) as usize]
    }

    fn next_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }
}

const CATEGORY_POOL: &[&str] = &[
    "room", "equipment", "lab", "facility", "space", "other", "ROOM", "  Lab ", "garage", "",
    "총무팀", "🏀 court", "room\n",
];

const NAME_POOL: &[&str] = &[
    "",
    "Wells Library Study Room 204",
    "wells library quiet pod",
    "Kelley Interview Room B",
    "SRSC Basketball Court",
    "Laptop Cart 7",
    "An Unregistered Meeting Space",
    "  PROJECTOR  ",
    "pod",
    "studio",
    "☃ snowman lounge",
    "name-with-no-match-at-all",
];

const SIZE_POOL: &[&str] = &["thumb", "medium", "large", "LARGE", " thumb ", "giant", "", "xl"];

/// Every resolved URL must be one of the configured URLs modulo its size
/// fragment, regardless of how degenerate the inputs are.
#[test]
fn randomized_inputs_always_resolve_to_a_configured_url() {
    let fragment = Regex::new(r"w=\d+&h=\d+").unwrap();
    let canonical = |url: &str| fragment.replace(url, "w=W&h=H").into_owned();

    let tables = ImageTables::campus_defaults();
    let configured: HashSet<String> = tables
        .named_entries()
        .chain(tables.category_entries())
        .map(|(_, url)| canonical(url))
        .collect();

    let resolver = StockImageResolver::with_defaults();
    let mut rng = Lcg::new(0x5EED_2024_1106);

    for _ in 0..512 {
        let category = if rng.next_bool() {
            Some(rng.pick(CATEGORY_POOL))
        } else {
            None
        };
        let name = if rng.next_bool() {
            Some(rng.pick(NAME_POOL))
        } else {
            None
        };
        let size = rng.pick(SIZE_POOL);

        let url = resolver.resolve_lenient(category, name, size);
        assert!(!url.is_empty());
        assert!(url.starts_with("https://"), "not a URL: {}", url);
        assert!(
            configured.contains(&canonical(&url)),
            "resolved to an unconfigured URL: {} (category {:?}, name {:?}, size {:?})",
            url,
            category,
            name,
            size
        );
    }
}

/// Identical inputs must always produce identical output.
#[test]
fn randomized_inputs_resolve_deterministically() {
    let resolver = StockImageResolver::with_defaults();
    let mut rng = Lcg::new(0xD07_D07_D07);

    for _ in 0..256 {
        let category = rng.pick(CATEGORY_POOL);
        let name = rng.pick(NAME_POOL);
        let size = rng.pick(SIZE_POOL);

        let first = resolver.resolve_lenient(Some(category), Some(name), size);
        let second = resolver.resolve_lenient(Some(category), Some(name), size);
        assert_eq!(first, second);
    }
}
