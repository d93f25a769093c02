use catalog_core::models::Catalog;
use catalog_core::ApiResult;

use super::http;

/// Full course tree for the sidebar
pub async fn list_catalog() -> ApiResult<Vec<Catalog>> {
    http::get("/catalog/").await
}
