use crate::application::ports::util::SlugNormalizer;
use crate::infrastructure::util::normalize_seed;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the configured reserved slugs, skipping ones already present.
/// Returns how many rows were added.
pub async fn seed_blacklist(
    pool: &PgPool,
    normalizer: &dyn SlugNormalizer,
    seed: &[String],
) -> Result<u64, sqlx::Error> {
    let mut inserted = 0;
    for slug in normalize_seed(normalizer, seed) {
        let result = sqlx::query(
            "INSERT INTO blacklisted_slugs (slug) VALUES ($1) ON CONFLICT (slug) DO NOTHING",
        )
        .bind(slug.as_str())
        .execute(pool)
        .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}
