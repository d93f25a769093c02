//! Course Admin App
//!
//! Router, context providers and the initial catalog/profile load.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::NoticeStack;
use crate::context::AppContext;
use crate::pages::{AskPage, AuthPage, CoursePage, HomePage, LessonPage, ModulePage, NotFound};
use crate::session::load_session;
use crate::store::UiState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(load_session());
    provide_context(ctx);
    provide_context(Store::new(UiState::default()));

    // Load tree and profile whenever a session starts
    Effect::new(move |_| {
        if ctx.is_authenticated() {
            tracing::info!("[APP] session present, loading catalog");
            ctx.reload_catalog();
            ctx.reload_user();
        }
    });

    view! {
        <Router>
            <NoticeStack />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/auth") view=AuthPage />
                <Route path=path!("/course/:slug") view=CoursePage />
                <Route path=path!("/course/module/:slug") view=ModulePage />
                <Route path=path!("/course/module/lesson/:slug") view=LessonPage />
                <Route path=path!("/course/module/ask/:slug") view=AskPage />
            </Routes>
        </Router>
    }
}
