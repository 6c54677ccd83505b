// src/application/ports/util.rs
pub trait SlugNormalizer: Send + Sync {
    /// Canonical slug form of `input`; empty when nothing usable remains.
    fn normalize(&self, input: &str) -> String;
}
