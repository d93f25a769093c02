//! Lesson Page

use catalog_core::mutation::{apply_title_edit, SubmitGuard};
use catalog_core::routes::{EntityKind, HOME_PATH};
use catalog_core::ApiError;
use leptos::prelude::*;

use super::{module_crumbs, run_delete, use_entity_lookup, Lookup, NotFound};
use crate::api;
use crate::components::{
    go_back, AdminLayout, BoxedRequest, Crumb, DeleteConfirmButton, FormMessages, LessonEditor, PageHeader,
    TitleForm,
};
use crate::context::use_app_context;
use crate::store::use_ui_store;

const EDIT_TITLE: FormMessages = FormMessages {
    loading: "Updating lesson...",
    success: "Lesson title updated",
    failure: "Lesson update failed",
};

const DELETE: FormMessages = FormMessages {
    loading: "Deleting lesson...",
    success: "Lesson deleted",
    failure: "Lesson deletion failed",
};

#[component]
pub fn LessonPage() -> impl IntoView {
    let ctx = use_app_context();
    let lookup = use_entity_lookup(EntityKind::Lesson, ctx.stores.lesson, |id: String| async move {
        api::lesson::get_lesson(&id).await
    });

    view! {
        <Show when=move || lookup.get() != Lookup::Missing fallback=|| view! { <NotFound /> }>
            <AdminLayout>
                <Show
                    when=move || lookup.get() == Lookup::Found
                    fallback=|| view! { <p class="page-loading">"Loading..."</p> }
                >
                    <LessonView />
                </Show>
            </AdminLayout>
        </Show>
    }
}

#[component]
fn LessonView() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let lesson = ctx.stores.lesson;
    let delete_guard = RwSignal::new(SubmitGuard::new());

    let lesson_id = Memo::new(move |_| lesson.with_value(|l| l.item_id.clone()));
    let title = move || lesson.with_value(|l| l.title.clone()).unwrap_or_default();

    let crumbs = Signal::derive(move || {
        let mut crumbs = vec![Crumb::link("Courses", HOME_PATH)];
        if let Some(module_id) = lesson.with_value(|l| l.module_id.clone()) {
            crumbs.extend(module_crumbs(ctx, &module_id));
        }
        crumbs.push(Crumb::current(title()));
        crumbs
    });

    let save_title = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = lesson_id.get_untracked().ok_or(ApiError::NotFound)?;
            apply_title_edit(&lesson, &new_title, api::lesson::edit_lesson_title(&id, &new_title)).await?;
            ctx.refresh_after_mutation(lesson, async move { api::lesson::get_lesson(&id).await });
            Ok::<(), ApiError>(())
        })
    };

    let on_delete = Callback::new(move |_: ()| {
        let Some(id) = lesson_id.get_untracked() else { return };
        run_delete(ctx, ui, delete_guard, DELETE, async move { api::lesson::delete_lesson(&id).await }, go_back);
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
                    label="Lesson title"
                    placeholder="New lesson title"
                    button_text="Update"
                    messages=EDIT_TITLE
                    submit=save_title
                />
            </section>
            <section class="card">
                <h3 class="card-title">"Content"</h3>
                <LessonEditor />
            </section>
        </div>
    }
}
