use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::TodoError;

/// `{id}` path parameter. A segment that is not an `i64` cannot address any
/// todo, so it is answered like an unknown id.
#[derive(Debug, Clone, Copy)]
pub struct TodoId(pub i64);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = TodoError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<i64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(Self(id)),
            Err(_) => {
                let raw = parts.uri.path().rsplit('/').next().unwrap_or_default();
                Err(TodoError::InvalidId(raw.to_string()))
            }
        }
    }
}
