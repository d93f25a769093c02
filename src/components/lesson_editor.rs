//! Lesson Editor Component
//!
//! Side-by-side markdown editing and preview of a lesson's content.

use catalog_core::models::LessonContent;
use catalog_core::mutation::SubmitGuard;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::app_config;
use crate::context::use_app_context;
use crate::markdown::render_lesson;
use crate::store::{notify_failure, notify_loading, notify_success, use_ui_store};

#[component]
pub fn LessonEditor() -> impl IntoView {
    let ctx = use_app_context();
    let ui = use_ui_store();
    let (text, set_text) = signal(String::new());
    // Unsaved edits are never overwritten by a reload
    let (dirty, set_dirty) = signal(false);
    let guard = RwSignal::new(SubmitGuard::new());
    let pending = move || guard.with(SubmitGuard::is_pending);

    let stored = Memo::new(move |_| ctx.stores.lesson.with_value(|l| l.content.text.clone()));
    Effect::new(move |_| {
        if let Some(content) = stored.get() {
            if !dirty.get_untracked() {
                set_text.set(content);
            }
        }
    });

    let on_save = move |_: web_sys::MouseEvent| {
        let Some(lesson_id) = ctx.stores.lesson.get_untracked().map(|l| l.item_id) else {
            return;
        };
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            return;
        };
        let content = LessonContent { text: text.get_untracked() };

        let id = notify_loading(&ui, "Saving lesson...");
        spawn_local(async move {
            match api::lesson::edit_lesson_content(&lesson_id, &content).await {
                Ok(()) => {
                    if text.get_untracked() == content.text {
                        set_dirty.set(false);
                    }
                    ctx.stores.lesson.merge(|l| l.content = content);
                    notify_success(&ui, id, "Lesson saved");
                }
                Err(e) => notify_failure(&ui, id, "Saving lesson failed", &e),
            }
            guard.update(|g| {
                g.finish(token);
            });
        });
    };

    view! {
        <div class="lesson-editor">
            <div class="lesson-editor-toolbar">
                <span class="lesson-editor-state">{move || if dirty.get() { "Unsaved changes" } else { "" }}</span>
                <button class="primary-btn" disabled=pending on:click=on_save>
                    {move || if pending() { "Saving..." } else { "Save" }}
                </button>
            </div>
            <div class="lesson-editor-panes">
                <textarea
                    class="lesson-editor-input"
                    placeholder="Lesson content (Markdown)"
                    prop:value=move || text.get()
                    on:input=move |ev| {
                        set_text.set(event_target_value(&ev));
                        set_dirty.set(true);
                    }
                />
                <div
                    class="lesson-editor-preview markdown-body"
                    inner_html=move || render_lesson(&text.get(), app_config())
                />
            </div>
        </div>
    }
}
