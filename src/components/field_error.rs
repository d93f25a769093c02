use catalog_core::forms::FieldErrors;
use leptos::prelude::*;

/// Inline message for one form field
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, #[prop(into)] field: String) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(&field).map(|message| {
                let message = message.to_string();
                view! { <p class="field-error">{message}</p> }
            })
        })
    }
}
