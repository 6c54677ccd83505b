use std::sync::Arc;

use crate::domain::blacklist::{BlacklistedSlugReadRepository, SlugBlacklistPolicy};

pub struct BlacklistQueryService {
    pub(super) read_repo: Arc<dyn BlacklistedSlugReadRepository>,
    pub(super) policy: Arc<SlugBlacklistPolicy>,
}

impl BlacklistQueryService {
    pub const fn new(
        read_repo: Arc<dyn BlacklistedSlugReadRepository>,
        policy: Arc<SlugBlacklistPolicy>,
    ) -> Self {
        Self { read_repo, policy }
    }
}
