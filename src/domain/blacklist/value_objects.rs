// src/domain/blacklist/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Longest slug a short-data column can hold.
pub const MAX_SLUG_LENGTH: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.chars().count() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LENGTH} characters long"
            )));
        }
        if value.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(DomainError::Validation(
                "slug cannot contain whitespace or '/'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Leading part of a stored slug, used to filter listings.
///
/// Unlike [`Slug`] candidates, a prefix is not slugified: `admin-` must keep
/// its trailing `-` so it does not match `administrator`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugPrefix(String);

impl SlugPrefix {
    pub fn new(value: &str) -> DomainResult<Self> {
        let value = value.trim().to_ascii_lowercase();
        if value.is_empty() {
            return Err(DomainError::Validation("prefix cannot be empty".into()));
        }
        if value.chars().count() > MAX_SLUG_LENGTH {
            return Err(DomainError::Validation(format!(
                "prefix must be at most {MAX_SLUG_LENGTH} characters long"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(DomainError::Validation(
                "prefix may only contain a-z, 0-9 and '-'".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, slug: &Slug) -> bool {
        slug.as_str().starts_with(self.as_str())
    }
}
