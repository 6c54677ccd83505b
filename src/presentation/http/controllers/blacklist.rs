// src/presentation/http/controllers/blacklist.rs
use crate::application::{
    commands::blacklist::{
        AddBlacklistedSlugCommand, RemoveBlacklistedSlugCommand, RenameBlacklistedSlugCommand,
    },
    dto::{BlacklistedSlugDto, SlugCheckDto},
    queries::blacklist::{CheckSlugQuery, GetBlacklistedSlugQuery, ListBlacklistedSlugsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery};
use crate::presentation::http::openapi::BlacklistedSlugListResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BlacklistedSlugListParams {
    /// Page size, capped at 100.
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Opaque token from a previous page.
    #[serde(default)]
    pub cursor: Option<String>,
    /// Only return slugs starting with this prefix (lowercased, `a-z`, `0-9`, `-`).
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BlacklistSlugRequest {
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/blacklisted-slugs",
    params(BlacklistedSlugListParams),
    responses(
        (status = 200, description = "Page of blacklisted slugs.", body = BlacklistedSlugListResponse),
        (status = 400, description = "Malformed query, cursor or prefix.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn list_blacklisted_slugs(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<BlacklistedSlugListParams>,
) -> HttpResult<Json<BlacklistedSlugListResponse>> {
    state
        .services
        .blacklist_queries
        .list_blacklisted_slugs(ListBlacklistedSlugsQuery {
            limit: params.limit,
            cursor: params.cursor,
            prefix: params.prefix,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/blacklisted-slugs",
    request_body = BlacklistSlugRequest,
    responses(
        (status = 201, description = "Slug blacklisted.", body = BlacklistedSlugDto),
        (status = 400, description = "Malformed body or unusable slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already blacklisted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn add_blacklisted_slug(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<BlacklistSlugRequest>,
) -> HttpResult<(StatusCode, Json<BlacklistedSlugDto>)> {
    state
        .services
        .blacklist_commands
        .add_blacklisted_slug(AddBlacklistedSlugCommand { slug: payload.slug })
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/api/v1/blacklisted-slugs/{slug}",
    params(("slug" = String, Path, description = "Blacklisted slug")),
    responses(
        (status = 200, description = "Blacklisted slug.", body = BlacklistedSlugDto),
        (status = 404, description = "Slug is not blacklisted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn get_blacklisted_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<BlacklistedSlugDto>> {
    state
        .services
        .blacklist_queries
        .get_blacklisted_slug(GetBlacklistedSlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/blacklisted-slugs/{slug}",
    params(("slug" = String, Path, description = "Slug to rename")),
    request_body = BlacklistSlugRequest,
    responses(
        (status = 200, description = "Renamed slug.", body = BlacklistedSlugDto),
        (status = 400, description = "Malformed body or unusable slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Slug is not blacklisted.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Target slug already blacklisted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn rename_blacklisted_slug(
    Extension(state): Extension<HttpState>,
    Path(current): Path<String>,
    ApiJson(payload): ApiJson<BlacklistSlugRequest>,
) -> HttpResult<Json<BlacklistedSlugDto>> {
    state
        .services
        .blacklist_commands
        .rename_blacklisted_slug(RenameBlacklistedSlugCommand {
            current,
            slug: payload.slug,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/blacklisted-slugs/{slug}",
    params(("slug" = String, Path, description = "Slug to remove")),
    responses(
        (status = 204, description = "Slug removed from the blacklist."),
        (status = 404, description = "Slug is not blacklisted.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn remove_blacklisted_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .blacklist_commands
        .remove_blacklisted_slug(RemoveBlacklistedSlugCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/slug-checks/{slug}",
    params(("slug" = String, Path, description = "Candidate slug")),
    responses(
        (status = 200, description = "Whether the candidate is reserved.", body = SlugCheckDto),
        (status = 400, description = "Candidate normalizes to nothing.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Blacklist"
)]
pub async fn check_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<SlugCheckDto>> {
    state
        .services
        .blacklist_queries
        .check_slug(CheckSlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}
