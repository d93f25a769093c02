use catalog_core::config::encode_segment;
use catalog_core::forms::{NewLesson, TitlePayload};
use catalog_core::models::{Lesson, LessonContent};
use catalog_core::ApiResult;

use super::http::{self, Verb};

fn lesson_path(id: &str) -> String {
    format!("/lessons/{}", encode_segment(id))
}

pub async fn get_lesson(id: &str) -> ApiResult<Lesson> {
    http::get(&lesson_path(id)).await
}

pub async fn create_lesson(title: &str, module_id: &str) -> ApiResult<Lesson> {
    http::send_json(Verb::Post, "/lessons/", &NewLesson { title, module_id }).await
}

pub async fn edit_lesson_title(id: &str, title: &str) -> ApiResult<()> {
    http::send_json_unit(Verb::Patch, &lesson_path(id), &TitlePayload { title }).await
}

pub async fn edit_lesson_content(id: &str, content: &LessonContent) -> ApiResult<()> {
    http::send_json_unit(Verb::Patch, &format!("{}/content", lesson_path(id)), content).await
}

pub async fn delete_lesson(id: &str) -> ApiResult<()> {
    http::delete(&lesson_path(id)).await
}
