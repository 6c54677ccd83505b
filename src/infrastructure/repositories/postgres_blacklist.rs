// src/infrastructure/repositories/postgres_blacklist.rs
use super::map_sqlx;
use crate::domain::blacklist::{
    BlacklistedSlug, BlacklistedSlugCursor, BlacklistedSlugReadRepository,
    BlacklistedSlugWriteRepository, Slug, SlugPrefix,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresBlacklistedSlugWriteRepository {
    pool: PgPool,
}

impl PostgresBlacklistedSlugWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresBlacklistedSlugReadRepository {
    pool: PgPool,
}

impl PostgresBlacklistedSlugReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlacklistedSlugRow {
    slug: String,
}

impl TryFrom<BlacklistedSlugRow> for BlacklistedSlug {
    type Error = DomainError;

    fn try_from(row: BlacklistedSlugRow) -> Result<Self, Self::Error> {
        Ok(Self::new(Slug::new(row.slug)?))
    }
}

#[async_trait]
impl BlacklistedSlugWriteRepository for PostgresBlacklistedSlugWriteRepository {
    async fn insert(&self, entry: BlacklistedSlug) -> DomainResult<BlacklistedSlug> {
        let row = sqlx::query_as::<_, BlacklistedSlugRow>(
            "INSERT INTO blacklisted_slugs (slug) VALUES ($1) RETURNING slug",
        )
        .bind(entry.slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        BlacklistedSlug::try_from(row)
    }

    async fn rename(&self, current: &Slug, replacement: Slug) -> DomainResult<BlacklistedSlug> {
        let row = sqlx::query_as::<_, BlacklistedSlugRow>(
            "UPDATE blacklisted_slugs SET slug = $2 WHERE slug = $1 RETURNING slug",
        )
        .bind(current.as_str())
        .bind(replacement.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("blacklisted slug not found".into()))?;

        BlacklistedSlug::try_from(row)
    }

    async fn delete(&self, slug: &Slug) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM blacklisted_slugs WHERE slug = $1")
            .bind(slug.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("blacklisted slug not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl BlacklistedSlugReadRepository for PostgresBlacklistedSlugReadRepository {
    async fn find(&self, slug: &Slug) -> DomainResult<Option<BlacklistedSlug>> {
        let row = sqlx::query_as::<_, BlacklistedSlugRow>(
            "SELECT slug FROM blacklisted_slugs WHERE slug = $1",
        )
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(BlacklistedSlug::try_from).transpose()
    }

    async fn exists(&self, slug: &Slug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM blacklisted_slugs WHERE slug = $1)",
        )
        .bind(slug.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        limit: u32,
        cursor: Option<BlacklistedSlugCursor>,
        prefix: Option<&SlugPrefix>,
    ) -> DomainResult<(Vec<BlacklistedSlug>, Option<BlacklistedSlugCursor>)> {
        let limit = limit.clamp(1, 100);
        let page_len = usize::try_from(limit)
            .map_err(|_| DomainError::Validation("page size out of range".into()))?;
        let fetch_limit = i64::from(limit) + 1;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT slug FROM blacklisted_slugs WHERE TRUE");

        if let Some(prefix) = prefix {
            builder.push(" AND starts_with(slug, ");
            builder.push_bind(prefix.as_str());
            builder.push(")");
        }

        if let Some(cursor) = cursor.as_ref() {
            builder.push(" AND slug > ");
            builder.push_bind(cursor.after.as_str());
        }

        builder.push(" ORDER BY slug ASC LIMIT ");
        builder.push_bind(fetch_limit);

        let rows = builder
            .build_query_as::<BlacklistedSlugRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut entries = rows
            .into_iter()
            .map(BlacklistedSlug::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let mut next_cursor = None;
        if entries.len() > page_len {
            entries.pop();
            if let Some(last) = entries.last() {
                next_cursor = Some(BlacklistedSlugCursor::new(last.slug.clone()));
            }
        }

        Ok((entries, next_cursor))
    }
}
