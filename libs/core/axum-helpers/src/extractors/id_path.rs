//! Identifier path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::str::FromStr;
use uuid::Uuid;

/// Extractor for a single identifier path parameter.
///
/// A segment that does not parse as `T` is rejected with
/// [`AppError::not_found`], the same 404 a handler returns for a well-formed
/// identifier with nothing stored behind it.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
/// use uuid::Uuid;
///
/// async fn get_product(IdPath(id): IdPath<Uuid>) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath<T = Uuid>(pub T);

impl<T, S> FromRequestParts<S> for IdPath<T>
where
    T: FromStr + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::InternalServerError(e.body_text()))?;

        raw.parse::<T>()
            .map(IdPath)
            .map_err(|_| AppError::not_found(raw))
    }
}
