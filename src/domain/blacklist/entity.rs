// src/domain/blacklist/entity.rs
use crate::domain::blacklist::value_objects::Slug;

/// A slug that must never be handed out as a short link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistedSlug {
    pub slug: Slug,
}

impl BlacklistedSlug {
    pub const fn new(slug: Slug) -> Self {
        Self { slug }
    }

    pub fn matches(&self, candidate: &Slug) -> bool {
        self.slug == *candidate
    }
}
