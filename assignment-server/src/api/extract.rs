//! Extractors mapping request rejections onto [`AppError`]
//!
//! | Extractor | Rejection |
//! |-----------|-----------|
//! | [`ApiJson`] | body not JSON → InvalidJson (400), shape mismatch → ValidationFailed (400) |
//! | [`ApiQuery`] | malformed query value → ValidationFailed (400) |
//! | [`ApiPath`] | malformed path id → NotFound (404) |

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::utils::AppError;

/// JSON body
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_request(e.body_text()))?;
        let value: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::invalid_json()
        })?;
        let data = serde_json::from_value(value).map_err(|e| AppError::validation(e.to_string()))?;
        Ok(Self(data))
    }
}

/// Query string
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(Self(data))
    }
}

/// Path parameters; ids that do not parse cannot name a record
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(data) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::not_found("Resource").with_detail("path", e.body_text()))?;
        Ok(Self(data))
    }
}

/// `is_completed` query flag: `true` in any case means completed, anything
/// else means not completed
pub fn completed_flag(raw: Option<&str>) -> Option<bool> {
    raw.map(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_flag() {
        assert_eq!(completed_flag(None), None);
        assert_eq!(completed_flag(Some("true")), Some(true));
        assert_eq!(completed_flag(Some("TRUE")), Some(true));
        assert_eq!(completed_flag(Some("false")), Some(false));
        assert_eq!(completed_flag(Some("1")), Some(false));
        assert_eq!(completed_flag(Some("")), Some(false));
    }
}
