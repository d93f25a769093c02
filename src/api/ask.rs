use catalog_core::answers::AskUpdate;
use catalog_core::config::encode_segment;
use catalog_core::forms::TitlePayload;
use catalog_core::models::Ask;
use catalog_core::ApiResult;

use super::http::{self, Verb};

fn ask_path(id: &str) -> String {
    format!("/asks/{}", encode_segment(id))
}

pub async fn get_ask(id: &str) -> ApiResult<Ask> {
    http::get(&ask_path(id)).await
}

/// New questions start as closed questions without answers
pub async fn create_ask(title: &str, module_id: &str) -> ApiResult<Ask> {
    let update = AskUpdate {
        module_id: module_id.to_string(),
        title: title.to_string(),
        is_input: false,
        answers: Vec::new(),
    };
    http::send_json(Verb::Post, "/asks/", &update).await
}

pub async fn edit_ask_title(id: &str, title: &str) -> ApiResult<()> {
    http::send_json_unit(Verb::Patch, &ask_path(id), &TitlePayload { title }).await
}

/// Replace the question with its full answer list
pub async fn edit_ask(id: &str, update: &AskUpdate) -> ApiResult<()> {
    http::send_json_unit(Verb::Put, &ask_path(id), update).await
}

pub async fn delete_ask(module_id: &str, id: &str) -> ApiResult<()> {
    http::delete(&format!("/modules/{}/asks/{}", encode_segment(module_id), encode_segment(id))).await
}
