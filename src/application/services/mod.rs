// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::blacklist::BlacklistCommandService, ports::util::SlugNormalizer,
        queries::blacklist::BlacklistQueryService,
    },
    domain::blacklist::{
        BlacklistedSlugReadRepository, BlacklistedSlugWriteRepository, SlugBlacklistPolicy,
    },
};

pub struct ApplicationServices {
    pub blacklist_commands: Arc<BlacklistCommandService>,
    pub blacklist_queries: Arc<BlacklistQueryService>,
    policy: Arc<SlugBlacklistPolicy>,
}

impl ApplicationServices {
    pub fn new(
        write_repo: Arc<dyn BlacklistedSlugWriteRepository>,
        read_repo: Arc<dyn BlacklistedSlugReadRepository>,
        normalizer: Arc<dyn SlugNormalizer>,
    ) -> Self {
        let policy = Arc::new(SlugBlacklistPolicy::new(Arc::clone(&read_repo), normalizer));

        let blacklist_commands = Arc::new(BlacklistCommandService::new(
            write_repo,
            Arc::clone(&read_repo),
            Arc::clone(&policy),
        ));

        let blacklist_queries = Arc::new(BlacklistQueryService::new(
            read_repo,
            Arc::clone(&policy),
        ));

        Self {
            blacklist_commands,
            blacklist_queries,
            policy,
        }
    }

    /// Policy used by link-creation flows to reject reserved slugs.
    pub fn blacklist_policy(&self) -> Arc<SlugBlacklistPolicy> {
        Arc::clone(&self.policy)
    }
}
