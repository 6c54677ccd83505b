// src/application/commands/blacklist/service.rs
use std::sync::Arc;

use crate::domain::blacklist::{
    BlacklistedSlugReadRepository, BlacklistedSlugWriteRepository, SlugBlacklistPolicy,
};

pub struct BlacklistCommandService {
    pub(super) write_repo: Arc<dyn BlacklistedSlugWriteRepository>,
    pub(super) read_repo: Arc<dyn BlacklistedSlugReadRepository>,
    pub(super) policy: Arc<SlugBlacklistPolicy>,
}

impl BlacklistCommandService {
    pub const fn new(
        write_repo: Arc<dyn BlacklistedSlugWriteRepository>,
        read_repo: Arc<dyn BlacklistedSlugReadRepository>,
        policy: Arc<SlugBlacklistPolicy>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            policy,
        }
    }
}
