//! Login Page
//!
//! Only administrators get a session; anyone else is told they have no
//! access and no cookies are written.

use catalog_core::forms::{validate_login, FieldErrors};
use catalog_core::mutation::SubmitGuard;
use catalog_core::routes::HOME_PATH;
use catalog_core::session::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::FieldError;
use crate::context::use_app_context;
use crate::session::store_session;
use crate::store::{notify_failed, notify_failure, notify_loading, notify_success, use_ui_store};

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let guard = RwSignal::new(SubmitGuard::new());
    let pending = move || guard.with(SubmitGuard::is_pending);

    // Also fires right after a successful sign-in
    Effect::new(move |_| {
        if ctx.is_authenticated() {
            navigate(HOME_PATH, Default::default());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let credentials = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(FieldErrors::new());
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            return;
        };

        let id = notify_loading(&ui, "Signing in...");
        spawn_local(async move {
            match api::user::login(&credentials).await {
                Ok(login) if login.is_admin() => {
                    let session = Session::from_login(&login);
                    store_session(&session);
                    ctx.session.set(Some(session));
                    set_password.set(String::new());
                    notify_success(&ui, id, "Signed in");
                    tracing::info!("[AUTH] signed in as {}", login.user_id);
                }
                Ok(login) => {
                    tracing::info!("[AUTH] role {:?} has no console access", login.role);
                    notify_failed(&ui, id, "You do not have access to the admin console");
                }
                Err(e) => notify_failure(&ui, id, "Sign-in failed", &e),
            }
            guard.update(|g| {
                g.finish(token);
            });
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form card" on:submit=on_submit>
                <h1 class="card-title">"Course Admin"</h1>
                <p class="card-description">"Sign in with an administrator account"</p>
                <label class="form-label" for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <FieldError errors=errors field="email" />
                <label class="form-label" for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <FieldError errors=errors field="password" />
                <button type="submit" class="primary-btn" disabled=pending>
                    {move || if pending() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>
        </div>
    }
}
