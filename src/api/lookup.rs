use catalog_core::config::encode_segment;
use catalog_core::routes::EntityKind;
use catalog_core::{ApiError, ApiResult};
use serde::de::DeserializeOwned;

use super::http;

/// Resolve a route slug to its entity. `Ok(None)` when the server does
/// not know the slug.
pub async fn check_type<T: DeserializeOwned>(kind: EntityKind, slug: &str) -> ApiResult<Option<T>> {
    let path = format!("/check_type/{}/{}", kind.as_str(), encode_segment(slug));
    match http::get(&path).await {
        Ok(entity) => Ok(Some(entity)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}
