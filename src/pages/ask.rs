//! Question Page

use catalog_core::mutation::{apply_title_edit, SubmitGuard};
use catalog_core::routes::{EntityKind, HOME_PATH};
use catalog_core::ApiError;
use leptos::prelude::*;

use super::{module_crumbs, run_delete, use_entity_lookup, Lookup, NotFound};
use crate::api;
use crate::components::{
    go_back, AdminLayout, AnswerEditor, BoxedRequest, Crumb, DeleteConfirmButton, FormMessages, PageHeader, TitleForm,
};
use crate::context::use_app_context;
use crate::store::use_ui_store;

const EDIT_TITLE: FormMessages = FormMessages {
    loading: "Updating question...",
    success: "Question updated",
    failure: "Question update failed",
};

const DELETE: FormMessages = FormMessages {
    loading: "Deleting question...",
    success: "Question deleted",
    failure: "Question deletion failed",
};

#[component]
pub fn AskPage() -> impl IntoView {
    let ctx = use_app_context();
    let lookup = use_entity_lookup(EntityKind::Ask, ctx.stores.ask, |id: String| async move {
        api::ask::get_ask(&id).await
    });

    view! {
        <Show when=move || lookup.get() != Lookup::Missing fallback=|| view! { <NotFound /> }>
            <AdminLayout>
                <Show
                    when=move || lookup.get() == Lookup::Found
                    fallback=|| view! { <p class="page-loading">"Loading..."</p> }
                >
                    <AskView />
                </Show>
            </AdminLayout>
        </Show>
    }
}

#[component]
fn AskView() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let ask = ctx.stores.ask;
    let delete_guard = RwSignal::new(SubmitGuard::new());

    let ask_id = Memo::new(move |_| ask.with_value(|a| a.item_id.clone()));
    let title = move || ask.with_value(|a| a.title.clone()).unwrap_or_default();

    let crumbs = Signal::derive(move || {
        let mut crumbs = vec![Crumb::link("Courses", HOME_PATH)];
        if let Some(module_id) = ask.with_value(|a| a.module_id.clone()) {
            crumbs.extend(module_crumbs(ctx, &module_id));
        }
        crumbs.push(Crumb::current(title()));
        crumbs
    });

    let save_title = move |new_title: String| -> BoxedRequest<()> {
        Box::pin(async move {
            let id = ask_id.get_untracked().ok_or(ApiError::NotFound)?;
            apply_title_edit(&ask, &new_title, api::ask::edit_ask_title(&id, &new_title)).await?;
            ctx.refresh_after_mutation(ask, async move { api::ask::get_ask(&id).await });
            Ok::<(), ApiError>(())
        })
    };

    let on_delete = Callback::new(move |_: ()| {
        let Some((id, module_id)) = ask.get_untracked().map(|a| (a.item_id, a.module_id)) else {
            return;
        };
        run_delete(
            ctx,
            ui,
            delete_guard,
            DELETE,
            async move { api::ask::delete_ask(&module_id, &id).await },
            go_back,
        );
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
                    label="Question"
                    placeholder="New question text"
                    button_text="Update"
                    messages=EDIT_TITLE
                    submit=save_title
                />
            </section>
            <section class="card">
                <h3 class="card-title">"Answers"</h3>
                <p class="card-description">
                    "Mark correct answers. An open answer as the first entry makes this an open-response question."
                </p>
                <AnswerEditor />
            </section>
        </div>
    }
}
