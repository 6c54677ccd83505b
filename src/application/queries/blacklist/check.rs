use super::BlacklistQueryService;
use crate::application::{dto::SlugCheckDto, error::ApplicationResult};

pub struct CheckSlugQuery {
    pub slug: String,
}

impl BlacklistQueryService {
    pub async fn check_slug(&self, query: CheckSlugQuery) -> ApplicationResult<SlugCheckDto> {
        let slug = self.policy.normalize(&query.slug)?;
        let blacklisted = self.policy.is_blacklisted(&slug).await?;

        Ok(SlugCheckDto {
            input: query.slug,
            slug: slug.into_inner(),
            blacklisted,
        })
    }
}
