use crate::domain::blacklist::cursor::BlacklistedSlugCursor;
use crate::domain::blacklist::entity::BlacklistedSlug;
use crate::domain::blacklist::value_objects::{Slug, SlugPrefix};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait BlacklistedSlugWriteRepository: Send + Sync {
    async fn insert(&self, entry: BlacklistedSlug) -> DomainResult<BlacklistedSlug>;
    async fn rename(&self, current: &Slug, replacement: Slug) -> DomainResult<BlacklistedSlug>;
    async fn delete(&self, slug: &Slug) -> DomainResult<()>;
}

#[async_trait]
pub trait BlacklistedSlugReadRepository: Send + Sync {
    async fn find(&self, slug: &Slug) -> DomainResult<Option<BlacklistedSlug>>;
    async fn exists(&self, slug: &Slug) -> DomainResult<bool>;
    /// Slugs ordered ascending, strictly after `cursor`, optionally restricted
    /// to those starting with `prefix`. The returned cursor is set when more
    /// records follow.
    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<BlacklistedSlugCursor>,
        prefix: Option<&SlugPrefix>,
    ) -> DomainResult<(Vec<BlacklistedSlug>, Option<BlacklistedSlugCursor>)>;
}
