// src/application/commands/blacklist/rename.rs
use super::BlacklistCommandService;
use crate::application::{
    dto::BlacklistedSlugDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct RenameBlacklistedSlugCommand {
    pub current: String,
    pub slug: String,
}

impl BlacklistCommandService {
    pub async fn rename_blacklisted_slug(
        &self,
        command: RenameBlacklistedSlugCommand,
    ) -> ApplicationResult<BlacklistedSlugDto> {
        let current = self.policy.normalize(&command.current)?;
        let replacement = self.policy.normalize(&command.slug)?;

        let existing = self
            .read_repo
            .find(&current)
            .await?
            .ok_or_else(|| ApplicationError::not_found("blacklisted slug not found"))?;

        if existing.matches(&replacement) {
            return Ok(existing.into());
        }

        if self.read_repo.exists(&replacement).await? {
            return Err(ApplicationError::conflict(format!(
                "slug '{replacement}' is already blacklisted"
            )));
        }

        let renamed = self.write_repo.rename(&current, replacement).await?;
        tracing::info!(from = %current, to = %renamed.slug, "blacklisted slug renamed");
        Ok(renamed.into())
    }
}
