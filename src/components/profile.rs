//! Profile Component
//!
//! Sidebar footer with the signed-in user and the logout action.

use catalog_core::mutation::SubmitGuard;
use catalog_core::routes::AUTH_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::use_app_context;
use crate::session::clear_session;

#[component]
pub fn Profile() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let guard = RwSignal::new(SubmitGuard::new());
    let user = move || ctx.stores.user.get();

    let on_logout = move |_: web_sys::MouseEvent| {
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::user::logout().await {
                tracing::warn!("[AUTH] logout request failed: {}", e);
            }
            clear_session();
            ctx.session.set(None);
            ctx.stores.user.reset();
            ctx.stores.catalog.reset();
            guard.update(|g| {
                g.finish(token);
            });
            tracing::info!("[AUTH] signed out");
            navigate(AUTH_PATH, Default::default());
        });
    };

    view! {
        <div class="profile">
            <div class="avatar">{move || user().map(|u| u.initials()).unwrap_or_default()}</div>
            <div class="profile-info">
                <span class="profile-name">{move || user().map(|u| u.display_name()).unwrap_or_default()}</span>
                <span class="profile-email">{move || user().and_then(|u| u.email).unwrap_or_default()}</span>
            </div>
            <button
                class="icon-btn"
                title="Log out"
                disabled=move || guard.with(SubmitGuard::is_pending)
                on:click=on_logout
            >
                "⎋"
            </button>
        </div>
    }
}
