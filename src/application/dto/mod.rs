pub mod blacklist;
pub mod pagination;

pub use blacklist::{BlacklistedSlugDto, SlugCheckDto};
pub use pagination::CursorPage;
