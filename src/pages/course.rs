//! Course Page
//!
//! Title edit, deletion, the three asset uploads and the module list.

use catalog_core::models::Module;
use catalog_core::mutation::{apply_title_edit, SubmitGuard};
use catalog_core::routes::{EntityKind, EntityRoute, HOME_PATH};
use catalog_core::tree::NodeKind;
use catalog_core::upload::UploadKind;
use catalog_core::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use super::{run_delete, use_entity_lookup, use_redirect, Lookup, NotFound};
use crate::api;
use crate::components::{
    AdminLayout, BoxedRequest, Crumb, DeleteConfirmButton, DocumentLink, EntityCard, FileDropZone, FormMessages,
    ImagePreview, PageHeader, TitleForm,
};
use crate::context::use_app_context;
use crate::store::use_ui_store;

const EDIT_TITLE: FormMessages = FormMessages {
    loading: "Updating course...",
    success: "Course title updated",
    failure: "Course update failed",
};

const ADD_MODULE: FormMessages = FormMessages {
    loading: "Creating module...",
    success: "Module created",
    failure: "Module creation failed",
};

const DELETE: FormMessages = FormMessages {
    loading: "Deleting course...",
    success: "Course deleted",
    failure: "Course deletion failed",
};

#[component]
pub fn CoursePage() -> impl IntoView {
    let ctx = use_app_context();
    let lookup = use_entity_lookup(EntityKind::Course, ctx.stores.course, |id: String| async move {
        api::course::get_course(&id).await
    });

    view! {
        <Show when=move || lookup.get() != Lookup::Missing fallback=|| view! { <NotFound /> }>
            <AdminLayout>
                <Show
                    when=move || lookup.get() == Lookup::Found
                    fallback=|| view! { <p class="page-loading">"Loading..."</p> }
                >
                    <CourseView />
                </Show>
            </AdminLayout>
        </Show>
    }
}

#[component]
fn CourseView() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let course = ctx.stores.course;
    let redirect = use_redirect();
    let delete_guard = RwSignal::new(SubmitGuard::new());

    let course_id = Memo::new(move |_| course.with_value(|c| c.item_id.clone()));
    let title = move || course.with_value(|c| c.title.clone()).unwrap_or_default();
    let crumbs = Signal::derive(move || vec![Crumb::link("Courses", HOME_PATH), Crumb::current(title())]);

    let save_title = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = course_id.get_untracked().ok_or(ApiError::NotFound)?;
            apply_title_edit(&course, &new_title, api::course::edit_course_title(&id, &new_title)).await?;
            ctx.refresh_after_mutation(course, async move { api::course::get_course(&id).await });
            Ok::<(), ApiError>(())
        })
    };

    let on_delete = Callback::new(move |_: ()| {
        let Some(id) = course_id.get_untracked() else { return };
        run_delete(ctx, ui, delete_guard, DELETE, async move { api::course::delete_course(&id).await }, move || {
            redirect.set(Some(HOME_PATH.to_string()))
        });
    });

    // Modules
    let (modules, set_modules) = signal(Vec::<Module>::new());
    let (modules_loading, set_modules_loading) = signal(true);
    let (modules_version, set_modules_version) = signal(0u32);
    let navigating = RwSignal::new(false);

    Effect::new(move |_| {
        modules_version.track();
        let Some(id) = course_id.get() else { return };
        set_modules_loading.set(true);
        spawn_local(async move {
            match api::course::get_course_modules(&id).await {
                Ok(list) => set_modules.set(list),
                Err(e) => tracing::warn!("[COURSE] loading modules of {} failed: {}", id, e),
            }
            set_modules_loading.set(false);
        });
    });

    let add_module = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = course_id.get_untracked().ok_or(ApiError::NotFound)?;
            api::module::create_module(&new_title, &id).await?;
            ctx.reload_catalog();
            set_modules_version.update(|v| *v += 1);
            Ok::<(), ApiError>(())
        })
    };

    // Uploads
    let upload = move |kind: UploadKind| {
        move |file: File| -> BoxedRequest<serde_json::Value> {
            Box::pin(async move {
                let id = course_id.get_untracked().ok_or(ApiError::NotFound)?;
                api::course::upload_course_asset(kind, &id, &file).await
            })
        }
    };
    let refresh_course = Callback::new(move |_: serde_json::Value| {
        let Some(id) = course_id.get_untracked() else { return };
        spawn_local(async move {
            course.reload(api::course::get_course(&id)).await;
        });
    });

    view! {
        <PageHeader crumbs=crumbs />
        <div class="page-content">
            <section class="card">
                <div class="card-header">
                    <h2 class="card-title">{title}</h2>
                    <DeleteConfirmButton
                        button_class="icon-btn danger"
                        disabled=Signal::derive(move || delete_guard.with(SubmitGuard::is_pending))
                        on_confirm=on_delete
                    />
                </div>
                <TitleForm
                    label="Course title"
                    placeholder="New course title"
                    button_text="Update"
                    messages=EDIT_TITLE
                    submit=save_title
                />
            </section>

            <section class="card-grid three">
                <div class="card">
                    <h3 class="card-title">"Main image"</h3>
                    <ImagePreview
                        path=Signal::derive(move || course.with_value(|c| c.image_main.clone()).flatten())
                        alt="Main image"
                    />
                    <FileDropZone
                        kind=UploadKind::MainImage
                        upload=upload(UploadKind::MainImage)
                        on_store_update=refresh_course
                    />
                </div>
                <div class="card">
                    <h3 class="card-title">"Menu image"</h3>
                    <ImagePreview
                        path=Signal::derive(move || course.with_value(|c| c.image_menu.clone()).flatten())
                        alt="Menu image"
                    />
                    <FileDropZone
                        kind=UploadKind::MenuImage
                        upload=upload(UploadKind::MenuImage)
                        on_store_update=refresh_course
                    />
                </div>
                <div class="card">
                    <h3 class="card-title">"Protocol template"</h3>
                    <DocumentLink path=Signal::derive(move || course.with_value(|c| c.template_file.clone()).flatten()) />
                    <FileDropZone
                        kind=UploadKind::Template
                        upload=upload(UploadKind::Template)
                        on_store_update=refresh_course
                    />
                </div>
            </section>

            <section class="card">
                <div class="card-header">
                    <div>
                        <h3 class="card-title">"Modules"</h3>
                        <p class="card-description">"Sections of this course"</p>
                    </div>
                </div>
                <TitleForm
                    label="New module"
                    placeholder="Module title"
                    button_text="Add"
                    messages=ADD_MODULE
                    submit=add_module
                />
                <Show
                    when=move || !modules_loading.get()
                    fallback=|| view! { <p class="page-loading">"Loading modules..."</p> }
                >
                    <Show
                        when=move || !modules.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-hint">"No modules yet"</p> }
                    >
                        <div class="card-list">
                            <For
                                each=move || modules.get()
                                key=|m| (m.item_id.clone(), m.title.clone())
                                children=move |m| view! {
                                    <EntityCard
                                        route=EntityRoute::Module(m.item_id)
                                        title=m.title
                                        icon=NodeKind::Module.icon()
                                        navigating=navigating
                                    />
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
