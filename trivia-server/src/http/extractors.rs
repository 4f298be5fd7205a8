//! Custom Axum extractors
//!
//! Wrap axum's own extractors so that rejections use the API error envelope.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{PageParams, Pagination, ValidationError};

/// Extract a numeric id from the path.
///
/// Integers outside the id column's range cannot name a record, so they are
/// reported as not found rather than malformed.
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Missing { field: "id" }))?;

        match id.parse::<i32>() {
            Ok(id) => Ok(Self(id)),
            Err(_) if is_integer_literal(&id) => Err(ApiError::NotFound {
                resource: "record",
                id,
            }),
            Err(_) => Err(ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                reason: "must be an integer",
            })),
        }
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `?page=` pagination that never rejects.
///
/// Anything the query string deserializer refuses (e.g. a repeated `page`)
/// falls back to the first page, like a non-numeric value does.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let params = match Query::<PageParams>::from_request_parts(parts, state).await {
            Ok(Query(params)) => params,
            Err(rejection) => {
                tracing::debug!("Ignoring unreadable query string: {}", rejection.body_text());
                PageParams::default()
            }
        };

        Ok(Self(Pagination::from(params)))
    }
}

/// JSON request body; malformed or missing bodies are 400s
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                Err(ApiError::Validation(ValidationError::InvalidFormat {
                    field: "body",
                    reason: rejection_reason(&rejection),
                }))
            }
        }
    }
}

fn rejection_reason(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => "expected a JSON request body",
        JsonRejection::JsonSyntaxError(_) => "malformed JSON",
        JsonRejection::JsonDataError(_) => "fields have the wrong type",
        _ => "could not read request body",
    }
}
