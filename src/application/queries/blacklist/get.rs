use super::BlacklistQueryService;
use crate::application::{
    dto::BlacklistedSlugDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetBlacklistedSlugQuery {
    pub slug: String,
}

impl BlacklistQueryService {
    pub async fn get_blacklisted_slug(
        &self,
        query: GetBlacklistedSlugQuery,
    ) -> ApplicationResult<BlacklistedSlugDto> {
        let slug = self.policy.normalize(&query.slug)?;
        self.read_repo
            .find(&slug)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("blacklisted slug not found"))
    }
}
