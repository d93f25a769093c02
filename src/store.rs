//! UI State Store
//!
//! Uses Leptos reactive_stores for notices and sidebar tree expansion.

use std::collections::HashSet;

use catalog_core::notice::{Notice, NoticeBoard, NoticeId, NOTICE_DURATION_MS};
use catalog_core::tree::NodeKey;
use catalog_core::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Loading and outcome notices, newest last
    pub notices: NoticeBoard,
    /// Tree nodes the user has opened
    pub expanded: HashSet<NodeKey>,
}

pub type UiStore = Store<UiState>;

pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Notices
// ========================

pub fn notice_list(store: &UiStore) -> Vec<Notice> {
    store.notices().read().notices().to_vec()
}

pub fn notify_loading(store: &UiStore, message: &str) -> NoticeId {
    store.notices().write().loading(message)
}

pub fn notify_success(store: &UiStore, id: NoticeId, message: &str) {
    let id = store.notices().write().succeed(id, message);
    schedule_dismiss(*store, id);
}

/// Resolve `id` as failure, e.g. "Module update failed: title taken"
pub fn notify_failure(store: &UiStore, id: NoticeId, action: &str, error: &ApiError) {
    tracing::warn!("[UI] {}: {}", action, error);
    notify_failed(store, id, &format!("{}: {}", action, error.user_message()));
}

pub fn notify_failed(store: &UiStore, id: NoticeId, message: &str) {
    let id = store.notices().write().fail(id, message);
    schedule_dismiss(*store, id);
}

/// Standalone failure notice, not tied to a loading one
pub fn notify_error(store: &UiStore, message: &str) {
    let id = store.notices().write().error(message);
    schedule_dismiss(*store, id);
}

pub fn dismiss_notice(store: &UiStore, id: NoticeId) {
    store.notices().write().dismiss(id);
}

fn schedule_dismiss(store: UiStore, id: NoticeId) {
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_DURATION_MS).await;
        store.notices().write().dismiss(id);
    });
}

// ========================
// Tree expansion
// ========================

pub fn expanded_nodes(store: &UiStore) -> HashSet<NodeKey> {
    store.expanded().get()
}

pub fn toggle_node(store: &UiStore, key: NodeKey) {
    let field = store.expanded();
    let mut expanded = field.write();
    if !expanded.remove(&key) {
        expanded.insert(key);
    }
}
