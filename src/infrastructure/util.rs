use crate::application::ports::util::SlugNormalizer;
use crate::domain::blacklist::Slug;
use slug::slugify;
use std::collections::BTreeSet;

#[derive(Default, Clone)]
pub struct DefaultSlugNormalizer;

impl SlugNormalizer for DefaultSlugNormalizer {
    fn normalize(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Normalize configured seed entries into distinct slugs, in order.
/// Entries that normalize to nothing are logged and skipped.
pub fn normalize_seed(normalizer: &dyn SlugNormalizer, seed: &[String]) -> Vec<Slug> {
    let mut seen = BTreeSet::new();
    seed.iter()
        .filter_map(|raw| {
            Slug::new(normalizer.normalize(raw))
                .inspect_err(|_| tracing::warn!(slug = %raw, "skipping unusable seed slug"))
                .ok()
        })
        .filter(|slug| seen.insert(slug.clone()))
        .collect()
}
