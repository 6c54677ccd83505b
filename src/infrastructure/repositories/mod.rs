// src/infrastructure/repositories/mod.rs
mod error;
mod memory_blacklist;
mod postgres_blacklist;

pub use error::map_sqlx;
pub use memory_blacklist::InMemoryBlacklistedSlugRepository;
pub use postgres_blacklist::{
    PostgresBlacklistedSlugReadRepository, PostgresBlacklistedSlugWriteRepository,
};
