//! UI Components
//!
//! Reusable Leptos components.

mod admin_layout;
mod answer_editor;
mod app_sidebar;
mod asset_preview;
mod catalog_tree;
mod delete_confirm_button;
mod entity_card;
mod field_error;
mod file_drop_zone;
mod lesson_editor;
mod notices;
mod page_header;
mod profile;
mod title_form;

pub use admin_layout::AdminLayout;
pub use answer_editor::AnswerEditor;
pub use app_sidebar::AppSidebar;
pub use asset_preview::{DocumentLink, ImagePreview};
pub use catalog_tree::CatalogTree;
pub use delete_confirm_button::DeleteConfirmButton;
pub use entity_card::EntityCard;
pub use field_error::FieldError;
pub use file_drop_zone::FileDropZone;
pub use lesson_editor::LessonEditor;
pub use notices::NoticeStack;
pub use page_header::{go_back, Crumb, PageHeader};
pub use profile::Profile;
pub use title_form::{BoxedRequest, FormMessages, TitleForm};
