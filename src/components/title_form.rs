//! Title Form Component
//!
//! Single-field form used both to rename an entity and to add a new one.

use std::future::Future;
use std::pin::Pin;

use catalog_core::forms::{validate_title, FieldErrors};
use catalog_core::mutation::SubmitGuard;
use catalog_core::ApiResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::FieldError;
use crate::store::{notify_failure, notify_loading, notify_success, use_ui_store};

/// In-flight request handed to a form by its page
pub type BoxedRequest<T> = Pin<Box<dyn Future<Output = ApiResult<T>>>>;

/// Notice wording for one form
#[derive(Debug, Clone, Copy)]
pub struct FormMessages {
    pub loading: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

/// Validated title form. `submit` runs the mutation; the input is cleared
/// once it succeeds.
#[component]
pub fn TitleForm(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] button_text: String,
    messages: FormMessages,
    submit: impl Fn(String) -> BoxedRequest<()> + Copy + 'static,
) -> impl IntoView {
    let ui = use_ui_store();
    let (text, set_text) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let guard = RwSignal::new(SubmitGuard::new());
    let pending = move || guard.with(SubmitGuard::is_pending);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = match validate_title(&text.get_untracked()) {
            Ok(title) => title,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            return;
        };

        let id = notify_loading(&ui, messages.loading);
        spawn_local(async move {
            match submit(title).await {
                Ok(()) => {
                    notify_success(&ui, id, messages.success);
                    set_text.set(String::new());
                }
                Err(e) => notify_failure(&ui, id, messages.failure, &e),
            }
            guard.update(|g| {
                g.finish(token);
            });
        });
    };

    view! {
        <form class="title-form" on:submit=on_submit>
            <label class="form-label">{label}</label>
            <div class="form-row">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=pending>
                    {move || if pending() { "Saving...".to_string() } else { button_text.clone() }}
                </button>
            </div>
            <FieldError errors=errors field="title" />
        </form>
    }
}
