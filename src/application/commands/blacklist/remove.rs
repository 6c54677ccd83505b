use super::BlacklistCommandService;
use crate::application::error::ApplicationResult;

pub struct RemoveBlacklistedSlugCommand {
    pub slug: String,
}

impl BlacklistCommandService {
    pub async fn remove_blacklisted_slug(
        &self,
        command: RemoveBlacklistedSlugCommand,
    ) -> ApplicationResult<()> {
        let slug = self.policy.normalize(&command.slug)?;
        self.write_repo.delete(&slug).await?;
        tracing::info!(slug = %slug, "slug removed from blacklist");
        Ok(())
    }
}
