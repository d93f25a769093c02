use catalog_core::config::encode_segment;
use catalog_core::forms::Credentials;
use catalog_core::models::{LoginResponse, User};
use catalog_core::ApiResult;

use super::http::{self, Verb};

pub async fn login(credentials: &Credentials) -> ApiResult<LoginResponse> {
    http::send_json(Verb::Post, "/login/", credentials).await
}

pub async fn logout() -> ApiResult<()> {
    http::delete("/logout/").await
}

pub async fn get_user(id: &str) -> ApiResult<User> {
    http::get(&format!("/users/{}", encode_segment(id))).await
}
