//! Delete Confirm Button Component
//!
//! Delete button guarded by a confirmation dialog.

use leptos::prelude::*;

/// Delete button with a confirm/cancel dialog
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `disabled` - Disables the button while a delete is in flight
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <button
            class=button_class
            title="Delete"
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                set_confirm_delete.set(true);
            }
        >
            "🗑"
        </button>
        <Show when=move || confirm_delete.get()>
            <div class="dialog-backdrop" on:click=move |_| set_confirm_delete.set(false)>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="dialog-title">"Confirm deletion"</h3>
                    <p class="dialog-description">"This action cannot be undone"</p>
                    <div class="dialog-actions">
                        <button
                            class="cancel-btn"
                            on:click=move |_| set_confirm_delete.set(false)
                        >
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn danger"
                            on:click=move |_| {
                                set_confirm_delete.set(false);
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
