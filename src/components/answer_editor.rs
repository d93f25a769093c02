//! Answer Editor Component
//!
//! Edits a question's answers and saves them with a full update. The
//! "add answer" control is hidden once the first answer is open-response.

use catalog_core::answers::AnswerForm;
use catalog_core::forms::FieldErrors;
use catalog_core::mutation::SubmitGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::FieldError;
use crate::context::use_app_context;
use crate::store::{notify_failure, notify_loading, notify_success, use_ui_store};

#[component]
pub fn AnswerEditor() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let form = RwSignal::new(AnswerForm::new());
    let errors = RwSignal::new(FieldErrors::new());
    let guard = RwSignal::new(SubmitGuard::new());
    let pending = move || guard.with(SubmitGuard::is_pending);

    // Title edits reload the question too; only new answers reseed the form
    let seed = Memo::new(move |_| ctx.stores.ask.with_value(|a| (a.item_id.clone(), a.answers.clone())));
    Effect::new(move |_| {
        if let Some((_, answers)) = seed.get() {
            form.set(AnswerForm::from_answers(&answers));
            errors.set(FieldErrors::new());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(ask) = ctx.stores.ask.get_untracked() else { return };
        let update = match form.with_untracked(|f| f.to_update(&ask)) {
            Ok(update) => update,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            return;
        };

        let id = notify_loading(&ui, "Saving answers...");
        spawn_local(async move {
            match api::ask::edit_ask(&ask.item_id, &update).await {
                Ok(()) => {
                    notify_success(&ui, id, "Answers saved");
                    let ask_id = ask.item_id.clone();
                    ctx.refresh_after_mutation(ctx.stores.ask, async move { api::ask::get_ask(&ask_id).await });
                }
                Err(e) => notify_failure(&ui, id, "Saving answers failed", &e),
            }
            guard.update(|g| {
                g.finish(token);
            });
        });
    };

    view! {
        <form class="answer-editor" on:submit=on_submit>
            <For
                each=move || 0..form.with(AnswerForm::len)
                key=|index| *index
                children=move |index| view! { <AnswerRow index=index form=form errors=errors /> }
            />
            <FieldError errors=errors field="answers" />
            <div class="form-actions">
                <Show when=move || form.with(AnswerForm::can_add_answer)>
                    <button
                        type="button"
                        class="secondary-btn"
                        on:click=move |_| form.update(|f| {
                            f.add_answer();
                        })
                    >
                        "+ Add answer"
                    </button>
                </Show>
                <button type="submit" class="primary-btn" disabled=pending>
                    {move || if pending() { "Saving..." } else { "Save answers" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn AnswerRow(index: usize, form: RwSignal<AnswerForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let draft = move || form.with(|f| f.answers().get(index).cloned().unwrap_or_default());

    view! {
        <div class="answer-row">
            <span class="answer-index">{index + 1}</span>
            <input
                type="text"
                placeholder="Answer text"
                prop:value=move || draft().title
                on:input=move |ev| form.update(|f| f.set_title(index, event_target_value(&ev)))
            />
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft().is_input
                    on:change=move |ev| form.update(|f| f.set_input(index, event_target_checked(&ev)))
                />
                "Open answer"
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft().is_true
                    on:change=move |ev| form.update(|f| f.set_true(index, event_target_checked(&ev)))
                />
                "Correct"
            </label>
            <button
                type="button"
                class="icon-btn"
                title="Remove answer"
                on:click=move |_| form.update(|f| f.remove(index))
            >
                "×"
            </button>
            <FieldError errors=errors field=format!("answers[{}].title", index) />
        </div>
    }
}
