// src/presentation/http/extractors.rs
use crate::application::error::ApplicationError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON body whose rejections render as [`HttpError`] bodies.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

/// Query string whose rejections render as [`HttpError`] bodies.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

fn malformed_request(detail: &str) -> HttpError {
    HttpError::from_error(ApplicationError::validation(detail))
}

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| malformed_request(&rejection.body_text()))
    }
}

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| malformed_request(&rejection.body_text()))
    }
}
