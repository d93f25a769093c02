//! App Sidebar Component
//!
//! Left column: new-course form, catalog tree and profile footer.

use catalog_core::ApiError;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::components::{BoxedRequest, CatalogTree, FormMessages, Profile, TitleForm};
use crate::context::use_app_context;

const ADD_COURSE: FormMessages = FormMessages {
    loading: "Creating course...",
    success: "Course created",
    failure: "Course creation failed",
};

#[component]
pub fn AppSidebar() -> impl IntoView {
    let ctx = use_app_context();

    let create_course = move |title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let course = api::course::create_course(&title).await?;
            tracing::info!("[CATALOG] created course {}", course.item_id);
            ctx.reload_catalog();
            Ok::<(), ApiError>(())
        })
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <A href="/">
                    <span class="logo">"Course Admin"</span>
                </A>
            </div>
            <div class="sidebar-content">
                <TitleForm
                    label="New course"
                    placeholder="Course title"
                    button_text="Add"
                    messages=ADD_COURSE
                    submit=create_course
                />
                <p class="sidebar-group-label">"Courses"</p>
                <CatalogTree />
            </div>
            <div class="sidebar-footer">
                <Profile />
            </div>
        </aside>
    }
}
