//! Notice Stack Component

use leptos::prelude::*;

use crate::store::{dismiss_notice, notice_list, use_ui_store};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = use_ui_store();

    view! {
        <div class="notice-stack">
            <For
                each=move || notice_list(&ui)
                key=|notice| (notice.id, notice.level, notice.message.clone())
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class()>
                            <span class="notice-message">{notice.message}</span>
                            <button class="notice-close" on:click=move |_| dismiss_notice(&ui, id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
