// src/application/commands/blacklist/add.rs
use super::BlacklistCommandService;
use crate::{
    application::{
        dto::BlacklistedSlugDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::blacklist::BlacklistedSlug,
};

pub struct AddBlacklistedSlugCommand {
    pub slug: String,
}

impl BlacklistCommandService {
    pub async fn add_blacklisted_slug(
        &self,
        command: AddBlacklistedSlugCommand,
    ) -> ApplicationResult<BlacklistedSlugDto> {
        let slug = self.policy.normalize(&command.slug)?;

        if self.read_repo.exists(&slug).await? {
            return Err(ApplicationError::conflict(format!(
                "slug '{slug}' is already blacklisted"
            )));
        }

        let created = self.write_repo.insert(BlacklistedSlug::new(slug)).await?;
        tracing::info!(slug = %created.slug, "slug blacklisted");
        Ok(created.into())
    }
}
