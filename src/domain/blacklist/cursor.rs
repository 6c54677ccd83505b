use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

use super::value_objects::Slug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlacklistedSlugCursor {
    pub after: Slug,
}

impl BlacklistedSlugCursor {
    pub const fn new(after: Slug) -> Self {
        Self { after }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.after.as_str().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| DomainError::Validation("invalid cursor token".into()))?;
        let raw = String::from_utf8(bytes)
            .map_err(|_| DomainError::Validation("invalid cursor token".into()))?;
        let after =
            Slug::new(raw).map_err(|_| DomainError::Validation("invalid cursor token".into()))?;
        Ok(Self::new(after))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_token_is_url_safe() {
        let cursor = BlacklistedSlugCursor::new(Slug::new("über-admin").unwrap());
        let token = cursor.encode();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(BlacklistedSlugCursor::decode(&token).unwrap(), cursor);
    }

    #[test]
    fn rejects_garbage_token() {
        let err = BlacklistedSlugCursor::decode("***").unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg == "invalid cursor token"));
    }

    #[test]
    fn rejects_token_holding_blank_slug() {
        let token = URL_SAFE_NO_PAD.encode("   ");
        assert!(BlacklistedSlugCursor::decode(&token).is_err());
    }
}
