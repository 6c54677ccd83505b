use super::BlacklistQueryService;
use crate::{
    application::{
        dto::{BlacklistedSlugDto, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        blacklist::{BlacklistedSlugCursor, SlugPrefix},
        errors::DomainError,
    },
};

pub const DEFAULT_LIMIT: u32 = 20;
pub const MAX_LIMIT: u32 = 100;

pub struct ListBlacklistedSlugsQuery {
    pub limit: u32,
    pub cursor: Option<String>,
    pub prefix: Option<String>,
}

impl BlacklistQueryService {
    pub async fn list_blacklisted_slugs(
        &self,
        query: ListBlacklistedSlugsQuery,
    ) -> ApplicationResult<CursorPage<BlacklistedSlugDto>> {
        let limit = Self::normalize_limit(query.limit);
        let cursor = Self::decode_cursor(query.cursor.as_deref())?;
        let prefix = Self::parse_prefix(query.prefix.as_deref())?;

        let (records, next_cursor) = self
            .read_repo
            .list_page(limit, cursor, prefix.as_ref())
            .await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }

    fn normalize_limit(limit: u32) -> u32 {
        if limit == 0 {
            DEFAULT_LIMIT
        } else {
            limit.min(MAX_LIMIT)
        }
    }

    // A blank prefix means no filter; anything else must be a usable prefix.
    fn parse_prefix(prefix: Option<&str>) -> ApplicationResult<Option<SlugPrefix>> {
        prefix
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(SlugPrefix::new)
            .transpose()
            .map_err(Into::into)
    }

    fn decode_cursor(token: Option<&str>) -> ApplicationResult<Option<BlacklistedSlugCursor>> {
        token
            .map(|value| {
                BlacklistedSlugCursor::decode(value).map_err(|err| match err {
                    DomainError::Validation(msg) => ApplicationError::validation(msg),
                    other => ApplicationError::from(other),
                })
            })
            .transpose()
    }
}
