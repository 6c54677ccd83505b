// tests/support/fixtures.rs
use linklite::domain::blacklist::{BlacklistedSlug, Slug};
use once_cell::sync::Lazy;

/// Slugs every test router starts with.
pub static RESERVED: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["admin", "api", "app", "login", "logout"]);

pub fn entry(slug: &str) -> BlacklistedSlug {
    BlacklistedSlug::new(Slug::new(slug).expect("fixture slug is valid"))
}

pub fn reserved_entries() -> Vec<BlacklistedSlug> {
    RESERVED.iter().map(|slug| entry(slug)).collect()
}
