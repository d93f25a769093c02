use catalog_core::routes::HOME_PATH;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href=HOME_PATH>"Back to courses"</A>
        </div>
    }
}
