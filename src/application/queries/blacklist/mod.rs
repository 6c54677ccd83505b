mod check;
mod get;
mod list;
mod service;

pub use check::CheckSlugQuery;
pub use get::GetBlacklistedSlugQuery;
pub use list::ListBlacklistedSlugsQuery;
pub use service::BlacklistQueryService;
