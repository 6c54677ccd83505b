// src/domain/blacklist/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugNormalizer;
use crate::domain::blacklist::repository::BlacklistedSlugReadRepository;
use crate::domain::blacklist::value_objects::Slug;
use crate::domain::errors::{DomainError, DomainResult};

/// Domain service deciding whether a candidate slug is reserved.
///
/// Every candidate goes through the normalizer first, so `"Admin"`,
/// `" admin "` and `"ADMIN"` are all checked against the stored `admin`.
pub struct SlugBlacklistPolicy {
    read_repo: Arc<dyn BlacklistedSlugReadRepository>,
    normalizer: Arc<dyn SlugNormalizer>,
}

impl SlugBlacklistPolicy {
    pub const fn new(
        read_repo: Arc<dyn BlacklistedSlugReadRepository>,
        normalizer: Arc<dyn SlugNormalizer>,
    ) -> Self {
        Self {
            read_repo,
            normalizer,
        }
    }

    pub fn normalize(&self, raw: &str) -> DomainResult<Slug> {
        Slug::new(self.normalizer.normalize(raw))
    }

    pub async fn is_blacklisted(&self, slug: &Slug) -> DomainResult<bool> {
        self.read_repo.exists(slug).await
    }

    /// Normalize `raw` and return it if it is free to use.
    pub async fn ensure_allowed(&self, raw: &str) -> DomainResult<Slug> {
        let slug = self.normalize(raw)?;
        if self.is_blacklisted(&slug).await? {
            return Err(DomainError::Conflict(format!("slug '{slug}' is reserved")));
        }
        Ok(slug)
    }
}
