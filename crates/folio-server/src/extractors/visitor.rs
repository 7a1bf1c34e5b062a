//! Visitor identity extractor
//!
//! The visitor id is an opaque value the client generates and persists on
//! its side. It is never authenticated; it only scopes the like toggle to
//! one browser session.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

pub const VISITOR_ID_HEADER: &str = "x-visitor-id";

/// The `x-visitor-id` header value, or an empty string when absent.
///
/// Extraction never rejects; handlers that require an id enforce that
/// themselves so the missing-header case gets a structured 400 body.
#[derive(Debug, Clone)]
pub struct VisitorId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for VisitorId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(VISITOR_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Ok(VisitorId(id))
    }
}
