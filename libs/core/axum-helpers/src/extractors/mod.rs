//! Custom extractors for Axum handlers.
//!
//! These extractors reject with [`AppError`](crate::errors::AppError) so
//! every failure renders the standard error envelope.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
