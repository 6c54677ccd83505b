pub mod cursor;
pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use cursor::BlacklistedSlugCursor;
pub use entity::BlacklistedSlug;
pub use repository::{BlacklistedSlugReadRepository, BlacklistedSlugWriteRepository};
pub use services::SlugBlacklistPolicy;
pub use value_objects::{Slug, SlugPrefix};
