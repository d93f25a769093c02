//! Entity Card Component
//!
//! Link card for a child entity. Once one card is clicked the whole list
//! ignores further clicks until the page changes.

use catalog_core::routes::EntityRoute;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn EntityCard(
    route: EntityRoute,
    #[prop(into)] title: String,
    icon: &'static str,
    /// Shared by all cards of one list
    navigating: RwSignal<bool>,
) -> impl IntoView {
    let on_click = move |ev: web_sys::MouseEvent| {
        if navigating.get_untracked() {
            ev.prevent_default();
        } else {
            navigating.set(true);
        }
    };

    view! {
        <div
            class=move || if navigating.get() { "entity-card disabled" } else { "entity-card" }
            on:click=on_click
        >
            <A href=route.path()>
                <span class="entity-card-icon">{icon}</span>
                <span class="entity-card-title">{title}</span>
            </A>
        </div>
    }
}
