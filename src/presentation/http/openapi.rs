// src/presentation/http/openapi.rs
use crate::application::dto::{BlacklistedSlugDto, CursorPage};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BlacklistedSlugListResponse {
    pub items: Vec<BlacklistedSlugDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

impl From<CursorPage<BlacklistedSlugDto>> for BlacklistedSlugListResponse {
    fn from(page: CursorPage<BlacklistedSlugDto>) -> Self {
        Self {
            items: page.items,
            next_cursor: page.next_cursor,
            has_more: page.has_more,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::blacklist::list_blacklisted_slugs,
        crate::presentation::http::controllers::blacklist::add_blacklisted_slug,
        crate::presentation::http::controllers::blacklist::get_blacklisted_slug,
        crate::presentation::http::controllers::blacklist::rename_blacklisted_slug,
        crate::presentation::http::controllers::blacklist::remove_blacklisted_slug,
        crate::presentation::http::controllers::blacklist::check_slug,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            BlacklistedSlugListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::blacklist::BlacklistSlugRequest,
            crate::application::dto::BlacklistedSlugDto,
            crate::application::dto::SlugCheckDto
        )
    ),
    tags(
        (name = "Blacklist", description = "Reserved short-link slugs"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Linklite API",
        description = "Registry of slugs that short links may not use",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs` (which also serves the JSON document), the Redoc
/// viewer at `/redoc`, and `/` redirecting to the docs.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
