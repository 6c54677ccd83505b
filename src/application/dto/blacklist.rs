use crate::domain::blacklist::BlacklistedSlug;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BlacklistedSlugDto {
    pub slug: String,
}

impl From<BlacklistedSlug> for BlacklistedSlugDto {
    fn from(entry: BlacklistedSlug) -> Self {
        Self {
            slug: entry.slug.into_inner(),
        }
    }
}

/// Outcome of checking a candidate slug against the blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SlugCheckDto {
    /// Candidate as submitted.
    pub input: String,
    /// Normalized form the candidate was compared as.
    pub slug: String,
    pub blacklisted: bool,
}
