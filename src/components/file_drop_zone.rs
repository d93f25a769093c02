//! File Drop Zone Component
//!
//! Single-file upload target: drop a file or click to pick one. The zone
//! ignores new files while an upload is in flight.

use catalog_core::mutation::SubmitGuard;
use catalog_core::upload::{AcceptList, UploadKind};
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{DragEvent, File};

use crate::components::BoxedRequest;
use crate::store::{notify_error, notify_failure, notify_loading, notify_success, use_ui_store};

#[component]
pub fn FileDropZone(
    kind: UploadKind,
    /// Performs the request for one file
    upload: impl Fn(File) -> BoxedRequest<serde_json::Value> + Copy + 'static,
    /// Overrides the allowlist of `kind`
    #[prop(optional)]
    accept: Option<AcceptList>,
    /// Runs before the success notice, to merge the response into a store
    #[prop(optional)]
    on_store_update: Option<Callback<serde_json::Value>>,
    #[prop(optional)] on_success: Option<Callback<serde_json::Value>>,
    #[prop(optional)] on_error: Option<Callback<String>>,
) -> impl IntoView {
    let ui = use_ui_store();
    let accept = accept.unwrap_or_else(|| kind.accept_list());
    let accept_attr = accept.as_attr();
    let accept = StoredValue::new(accept);
    let guard = RwSignal::new(SubmitGuard::new());
    let (is_over, set_is_over) = signal(false);
    let input_ref = NodeRef::<Input>::new();
    let is_uploading = move || guard.with(SubmitGuard::is_pending);

    let start_upload = move |file: File| {
        let name = file.name();
        if !accept.with_value(|a| a.accepts(&file.type_(), &name)) {
            notify_error(&ui, &format!("Unsupported file type: {}", name));
            return;
        }
        let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
            tracing::debug!("[UPLOAD] ignoring {} while another upload runs", name);
            return;
        };

        tracing::info!("[UPLOAD] {:?} <- {}", kind, name);
        let id = notify_loading(&ui, kind.loading_message());
        spawn_local(async move {
            match upload(file).await {
                Ok(response) => {
                    if let Some(cb) = on_store_update {
                        cb.run(response.clone());
                    }
                    notify_success(&ui, id, kind.success_message());
                    if let Some(cb) = on_success {
                        cb.run(response);
                    }
                }
                Err(e) => {
                    notify_failure(&ui, id, kind.failure_message(), &e);
                    if let Some(cb) = on_error {
                        cb.run(e.user_message());
                    }
                }
            }
            guard.update(|g| {
                g.finish(token);
            });
        });
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_uploading() {
            set_is_over.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) {
            start_upload(file);
        }
    };

    let on_click = move |_: web_sys::MouseEvent| {
        if is_uploading() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_: web_sys::Event| {
        let Some(input) = input_ref.get() else { return };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            start_upload(file);
        }
        // Picking the same file twice must fire change again
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                let mut c = "drop-zone".to_string();
                if is_over.get() { c.push_str(" active"); }
                if is_uploading() { c.push_str(" disabled"); }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <input
                type="file"
                class="hidden"
                accept=accept_attr
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            <p class="drop-zone-title">
                {move || if is_uploading() { "Uploading..." } else { "Drop a file here or click to choose" }}
            </p>
            <p class="drop-zone-hint">{kind.formats_hint()}</p>
        </div>
    }
}
