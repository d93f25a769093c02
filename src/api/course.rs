use catalog_core::config::encode_segment;
use catalog_core::forms::TitlePayload;
use catalog_core::models::{Course, Module};
use catalog_core::upload::UploadKind;
use catalog_core::{ApiError, ApiResult};
use web_sys::{File, FormData};

use super::http::{self, Verb};

fn course_path(id: &str) -> String {
    format!("/courses/{}", encode_segment(id))
}

pub async fn get_course(id: &str) -> ApiResult<Course> {
    http::get(&course_path(id)).await
}

pub async fn get_course_modules(id: &str) -> ApiResult<Vec<Module>> {
    http::get(&format!("{}/modules", course_path(id))).await
}

pub async fn create_course(title: &str) -> ApiResult<Course> {
    http::send_json(Verb::Post, "/courses/", &TitlePayload { title }).await
}

pub async fn edit_course_title(id: &str, title: &str) -> ApiResult<()> {
    http::send_json_unit(Verb::Patch, &course_path(id), &TitlePayload { title }).await
}

pub async fn delete_course(id: &str) -> ApiResult<()> {
    http::delete(&course_path(id)).await
}

/// Upload one course asset as multipart field `file`
pub async fn upload_course_asset(kind: UploadKind, id: &str, file: &File) -> ApiResult<serde_json::Value> {
    let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;
    http::post_form(&kind.endpoint(id), form).await
}
