use catalog_core::routes::AUTH_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::AppSidebar;
use crate::context::use_app_context;

/// Sidebar plus page content; sends signed-out visitors to the login page
#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if !ctx.is_authenticated() {
            tracing::info!("[AUTH] no session, redirecting to login");
            navigate(AUTH_PATH, Default::default());
        }
    });

    view! {
        <div class="admin-layout">
            <AppSidebar />
            <main class="admin-main">{children()}</main>
        </div>
    }
}
