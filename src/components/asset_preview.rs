//! Asset Previews
//!
//! Course image thumbnails with a click-to-enlarge overlay, and the
//! template document link.

use leptos::prelude::*;

use crate::config::app_config;

#[component]
pub fn ImagePreview(#[prop(into)] path: Signal<Option<String>>, #[prop(into)] alt: String) -> impl IntoView {
    let (enlarged, set_enlarged) = signal(false);
    let src = move || path.get().map(|p| app_config().asset_url(&p));
    let alt = StoredValue::new(alt);

    view! {
        <Show
            when=move || src().is_some()
            fallback=|| view! { <p class="empty-hint">"No image uploaded"</p> }
        >
            <img
                class="image-preview"
                src=move || src().unwrap_or_default()
                alt=move || alt.get_value()
                on:click=move |_| set_enlarged.set(true)
            />
            <Show when=move || enlarged.get()>
                <div class="image-overlay" on:click=move |_| set_enlarged.set(false)>
                    <img src=move || src().unwrap_or_default() alt=move || alt.get_value() />
                </div>
            </Show>
        </Show>
    }
}

#[component]
pub fn DocumentLink(#[prop(into)] path: Signal<Option<String>>) -> impl IntoView {
    move || match path.get() {
        Some(p) => {
            let name = p.rsplit('/').next().unwrap_or(&p).to_string();
            view! {
                <a class="document-link" href=app_config().asset_url(&p) target="_blank">
                    "📄 " {name}
                </a>
            }
            .into_any()
        }
        None => view! { <p class="empty-hint">"No template uploaded"</p> }.into_any(),
    }
}
