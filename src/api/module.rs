use catalog_core::config::encode_segment;
use catalog_core::forms::{NewModule, TitlePayload};
use catalog_core::models::{Ask, Lesson, Module};
use catalog_core::ApiResult;

use super::http::{self, Verb};

fn module_path(id: &str) -> String {
    format!("/modules/{}", encode_segment(id))
}

pub async fn get_module(id: &str) -> ApiResult<Module> {
    http::get(&module_path(id)).await
}

pub async fn get_module_lessons(id: &str) -> ApiResult<Vec<Lesson>> {
    http::get(&format!("{}/lessons", module_path(id))).await
}

pub async fn get_module_asks(id: &str) -> ApiResult<Vec<Ask>> {
    http::get(&format!("{}/asks", module_path(id))).await
}

pub async fn create_module(title: &str, course_id: &str) -> ApiResult<Module> {
    http::send_json(Verb::Post, "/modules/", &NewModule { title, course_id }).await
}

pub async fn edit_module_title(id: &str, title: &str) -> ApiResult<()> {
    http::send_json_unit(Verb::Patch, &module_path(id), &TitlePayload { title }).await
}

pub async fn delete_module(id: &str) -> ApiResult<()> {
    http::delete(&module_path(id)).await
}
