//! Module Page
//!
//! Title edit, deletion, and the module's lessons and questions.

use catalog_core::models::{Ask, Lesson};
use catalog_core::mutation::{apply_title_edit, SubmitGuard};
use catalog_core::routes::{EntityKind, EntityRoute, HOME_PATH};
use catalog_core::tree::{find_course, NodeKind};
use catalog_core::ApiError;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{run_delete, use_entity_lookup, Lookup, NotFound};
use crate::api;
use crate::components::{
    go_back, AdminLayout, BoxedRequest, Crumb, DeleteConfirmButton, EntityCard, FormMessages, PageHeader, TitleForm,
};
use crate::context::use_app_context;
use crate::store::use_ui_store;

const EDIT_TITLE: FormMessages = FormMessages {
    loading: "Updating module...",
    success: "Module title updated",
    failure: "Module update failed",
};

const ADD_LESSON: FormMessages = FormMessages {
    loading: "Creating lesson...",
    success: "Lesson created",
    failure: "Lesson creation failed",
};

const ADD_ASK: FormMessages = FormMessages {
    loading: "Creating question...",
    success: "Question created",
    failure: "Question creation failed",
};

const DELETE: FormMessages = FormMessages {
    loading: "Deleting module...",
    success: "Module deleted",
    failure: "Module deletion failed",
};

#[component]
pub fn ModulePage() -> impl IntoView {
    let ctx = use_app_context();
    let lookup = use_entity_lookup(EntityKind::Module, ctx.stores.module, |id: String| async move {
        api::module::get_module(&id).await
    });

    view! {
        <Show when=move || lookup.get() != Lookup::Missing fallback=|| view! { <NotFound /> }>
            <AdminLayout>
                <Show
                    when=move || lookup.get() == Lookup::Found
                    fallback=|| view! { <p class="page-loading">"Loading..."</p> }
                >
                    <ModuleView />
                </Show>
            </AdminLayout>
        </Show>
    }
}

#[component]
fn ModuleView() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let module = ctx.stores.module;
    let delete_guard = RwSignal::new(SubmitGuard::new());

    let module_id = Memo::new(move |_| module.with_value(|m| m.item_id.clone()));
    let title = move || module.with_value(|m| m.title.clone()).unwrap_or_default();

    let crumbs = Signal::derive(move || {
        let mut crumbs = vec![Crumb::link("Courses", HOME_PATH)];
        if let Some(course_id) = module.with_value(|m| m.course_id.clone()) {
            let course_title = ctx
                .stores
                .catalog
                .with_value(|c| find_course(c, &course_id).map(|c| c.title.clone()))
                .flatten()
                .unwrap_or_else(|| "Course".to_string());
            crumbs.push(Crumb::link(course_title, EntityRoute::Course(course_id).path()));
        }
        crumbs.push(Crumb::current(title()));
        crumbs
    });

    let save_title = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = module_id.get_untracked().ok_or(ApiError::NotFound)?;
            apply_title_edit(&module, &new_title, api::module::edit_module_title(&id, &new_title)).await?;
            ctx.refresh_after_mutation(module, async move { api::module::get_module(&id).await });
            Ok::<(), ApiError>(())
        })
    };

    let on_delete = Callback::new(move |_: ()| {
        let Some(id) = module_id.get_untracked() else { return };
        run_delete(ctx, ui, delete_guard, DELETE, async move { api::module::delete_module(&id).await }, go_back);
    });

    // Lessons and questions; failures keep the lists as they were
    let (lessons, set_lessons) = signal(Vec::<Lesson>::new());
    let (lessons_loading, set_lessons_loading) = signal(true);
    let (asks, set_asks) = signal(Vec::<Ask>::new());
    let (asks_loading, set_asks_loading) = signal(true);
    let (children_version, set_children_version) = signal(0u32);
    let navigating = RwSignal::new(false);

    Effect::new(move |_| {
        children_version.track();
        let Some(id) = module_id.get() else { return };
        set_lessons_loading.set(true);
        set_asks_loading.set(true);
        let lessons_id = id.clone();
        spawn_local(async move {
            match api::module::get_module_lessons(&lessons_id).await {
                Ok(list) => set_lessons.set(list),
                Err(e) => tracing::warn!("[MODULE] loading lessons of {} failed: {}", lessons_id, e),
            }
            set_lessons_loading.set(false);
        });
        spawn_local(async move {
            match api::module::get_module_asks(&id).await {
                Ok(list) => set_asks.set(list),
                Err(e) => tracing::warn!("[MODULE] loading questions of {} failed: {}", id, e),
            }
            set_asks_loading.set(false);
        });
    });

    let add_lesson = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = module_id.get_untracked().ok_or(ApiError::NotFound)?;
            api::lesson::create_lesson(&new_title, &id).await?;
            ctx.reload_catalog();
            set_children_version.update(|v| *v += 1);
            Ok::<(), ApiError>(())
        })
    };

    let add_ask = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = module_id.get_untracked().ok_or(ApiError::NotFound)?;
            api::ask::create_ask(&new_title, &id).await?;
            ctx.reload_catalog();
            set_children_version.update(|v| *v += 1);
            Ok::<(), ApiError>(())
        })
    };

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
                    label="Module title"
                    placeholder="New module title"
                    button_text="Update"
                    messages=EDIT_TITLE
                    submit=save_title
                />
            </section>

            <section class="card">
                <div class="card-header">
                    <div>
                        <h3 class="card-title">"Lessons"</h3>
                        <p class="card-description">"Study material of this module"</p>
                    </div>
                </div>
                <TitleForm
                    label="New lesson"
                    placeholder="Lesson title"
                    button_text="Add"
                    messages=ADD_LESSON
                    submit=add_lesson
                />
                <Show
                    when=move || !lessons_loading.get()
                    fallback=|| view! { <p class="page-loading">"Loading lessons..."</p> }
                >
                    <Show
                        when=move || !lessons.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-hint">"No lessons yet"</p> }
                    >
                        <div class="card-list">
                            <For
                                each=move || lessons.get()
                                key=|l| (l.item_id.clone(), l.title.clone())
                                children=move |l| view! {
                                    <EntityCard
                                        route=EntityRoute::Lesson(l.item_id)
                                        title=l.title
                                        icon=NodeKind::Lesson.icon()
                                        navigating=navigating
                                    />
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </section>

            <section class="card">
                <div class="card-header">
                    <div>
                        <h3 class="card-title">"Questions"</h3>
                        <p class="card-description">"Checks of what the module taught"</p>
                    </div>
                </div>
                <TitleForm
                    label="New question"
                    placeholder="Question text"
                    button_text="Add"
                    messages=ADD_ASK
                    submit=add_ask
                />
                <Show
                    when=move || !asks_loading.get()
                    fallback=|| view! { <p class="page-loading">"Loading questions..."</p> }
                >
                    <Show
                        when=move || !asks.with(Vec::is_empty)
                        fallback=|| view! { <p class="empty-hint">"No questions yet"</p> }
                    >
                        <div class="card-list">
                            <For
                                each=move || asks.get()
                                key=|a| (a.item_id.clone(), a.title.clone())
                                children=move |a| view! {
                                    <EntityCard
                                        route=EntityRoute::Ask(a.item_id)
                                        title=a.title
                                        icon=NodeKind::Ask.icon()
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
