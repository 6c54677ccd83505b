// src/infrastructure/repositories/memory_blacklist.rs
use std::collections::BTreeMap;
use std::ops::Bound;

use crate::application::ports::util::SlugNormalizer;
use crate::domain::blacklist::{
    BlacklistedSlug, BlacklistedSlugCursor, BlacklistedSlugReadRepository,
    BlacklistedSlugWriteRepository, Slug, SlugPrefix,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::util::normalize_seed;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local store implementing both repository sides. Ordering matches
/// the Postgres repository (byte-wise ascending slug).
#[derive(Default)]
pub struct InMemoryBlacklistedSlugRepository {
    entries: RwLock<BTreeMap<Slug, BlacklistedSlug>>,
}

impl InMemoryBlacklistedSlugRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: impl IntoIterator<Item = BlacklistedSlug>) -> Self {
        let map = entries
            .into_iter()
            .map(|entry| (entry.slug.clone(), entry))
            .collect();
        Self {
            entries: RwLock::new(map),
        }
    }

    /// Store preloaded with the configured reserved slugs.
    pub fn seeded(normalizer: &dyn SlugNormalizer, seed: &[String]) -> Self {
        Self::with_entries(
            normalize_seed(normalizer, seed)
                .into_iter()
                .map(BlacklistedSlug::new),
        )
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl BlacklistedSlugWriteRepository for InMemoryBlacklistedSlugRepository {
    async fn insert(&self, entry: BlacklistedSlug) -> DomainResult<BlacklistedSlug> {
        let mut map = self.entries.write().await;
        if map.contains_key(&entry.slug) {
            return Err(DomainError::Conflict("slug is already blacklisted".into()));
        }
        map.insert(entry.slug.clone(), entry.clone());
        drop(map);
        Ok(entry)
    }

    async fn rename(&self, current: &Slug, replacement: Slug) -> DomainResult<BlacklistedSlug> {
        let mut map = self.entries.write().await;
        if !map.contains_key(current) {
            return Err(DomainError::NotFound("blacklisted slug not found".into()));
        }
        if *current == replacement {
            return Ok(BlacklistedSlug::new(replacement));
        }
        if map.contains_key(&replacement) {
            return Err(DomainError::Conflict("slug is already blacklisted".into()));
        }
        map.remove(current);
        let renamed = BlacklistedSlug::new(replacement);
        map.insert(renamed.slug.clone(), renamed.clone());
        drop(map);
        Ok(renamed)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        self.entries
            .write()
            .await
            .remove(slug)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("blacklisted slug not found".into()))
    }
}

#[async_trait]
impl BlacklistedSlugReadRepository for InMemoryBlacklistedSlugRepository {
    async fn find(&self, slug: &Slug) -> DomainResult<Option<BlacklistedSlug>> {
        Ok(self.entries.read().await.get(slug).cloned())
    }

    async fn exists(&self, slug: &Slug) -> DomainResult<bool> {
        Ok(self.entries.read().await.contains_key(slug))
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<BlacklistedSlugCursor>,
        prefix: Option<&SlugPrefix>,
    ) -> DomainResult<(Vec<BlacklistedSlug>, Option<BlacklistedSlugCursor>)> {
        let limit = usize::try_from(limit.clamp(1, 100))
            .map_err(|_| DomainError::Validation("page size out of range".into()))?;
        let lower = cursor
            .as_ref()
            .map_or(Bound::Unbounded, |cursor| Bound::Excluded(&cursor.after));

        let map = self.entries.read().await;
        let mut entries: Vec<BlacklistedSlug> = map
            .range::<Slug, _>((lower, Bound::Unbounded))
            .map(|(_, entry)| entry)
            .filter(|entry| prefix.is_none_or(|p| p.matches(&entry.slug)))
            .take(limit + 1)
            .cloned()
            .collect();
        drop(map);

        let mut next_cursor = None;
        if entries.len() > limit {
            entries.pop();
            if let Some(last) = entries.last() {
                next_cursor = Some(BlacklistedSlugCursor::new(last.slug.clone()));
            }
        }

        Ok((entries, next_cursor))
    }
}
