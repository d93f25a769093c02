//! Application Context
//!
//! Session and entity stores provided via Leptos Context API.

use std::future::Future;

use catalog_core::models::{Ask, Catalog, Course, Lesson, Module, User};
use catalog_core::session::Session;
use catalog_core::store::{reload, EntityStore, ReloadOutcome, StoreCell};
use catalog_core::ApiResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;

/// Reactive owner of one [`EntityStore`]
pub struct StoreSignal<T: Send + Sync + 'static>(RwSignal<EntityStore<T>>);

impl<T: Send + Sync + 'static> Clone for StoreSignal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for StoreSignal<T> {}

impl<T: Send + Sync + 'static> StoreCell<T> for StoreSignal<T> {
    fn with_store<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> R {
        f(&mut self.0.write())
    }
}

impl<T: Clone + Send + Sync + 'static> StoreSignal<T> {
    fn new() -> Self {
        Self(RwSignal::new(EntityStore::new()))
    }

    /// Tracked read of the current value
    pub fn get(&self) -> Option<T> {
        self.0.with(|s| s.current().cloned())
    }

    pub fn get_untracked(&self) -> Option<T> {
        self.0.with_untracked(|s| s.current().cloned())
    }

    /// Tracked read of a projection of the current value
    pub fn with_value<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.0.with(|s| s.current().map(f))
    }

    pub fn initialize(&self, value: T) {
        self.with_store(|s| s.initialize(value));
    }

    pub fn set(&self, value: T) {
        self.with_store(|s| s.set(value));
    }

    pub fn merge(&self, f: impl FnOnce(&mut T)) -> bool {
        self.with_store(|s| s.merge(f))
    }

    pub fn reset(&self) {
        self.with_store(|s| s.reset());
    }

    pub async fn reload(&self, fetch: impl Future<Output = ApiResult<T>>) -> ReloadOutcome {
        reload(self, fetch).await
    }
}

/// Every entity store of the console
#[derive(Clone, Copy)]
pub struct AdminStores {
    pub catalog: StoreSignal<Vec<Catalog>>,
    pub course: StoreSignal<Course>,
    pub module: StoreSignal<Module>,
    pub lesson: StoreSignal<Lesson>,
    pub ask: StoreSignal<Ask>,
    pub user: StoreSignal<User>,
}

impl AdminStores {
    fn new() -> Self {
        Self {
            catalog: StoreSignal::new(),
            course: StoreSignal::new(),
            module: StoreSignal::new(),
            lesson: StoreSignal::new(),
            ask: StoreSignal::new(),
            user: StoreSignal::new(),
        }
    }
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current session; `None` means logged out
    pub session: RwSignal<Option<Session>>,
    pub stores: AdminStores,
}

impl AppContext {
    pub fn new(session: Option<Session>) -> Self {
        Self { session: RwSignal::new(session), stores: AdminStores::new() }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(Option::is_some)
    }

    /// Refresh the sidebar tree in the background
    pub fn reload_catalog(&self) {
        let catalog = self.stores.catalog;
        spawn_local(async move {
            catalog.reload(api::catalog::list_catalog()).await;
        });
    }

    /// Reload one entity, then the catalog, in that order
    pub fn refresh_after_mutation<T, F>(&self, store: StoreSignal<T>, fetch: F)
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = ApiResult<T>> + 'static,
    {
        let catalog = self.stores.catalog;
        spawn_local(async move {
            store.reload(fetch).await;
            catalog.reload(api::catalog::list_catalog()).await;
        });
    }

    /// Load the signed-in user's profile
    pub fn reload_user(&self) {
        let Some(user_id) = self.session.with_untracked(|s| s.as_ref().and_then(|s| s.user_id.clone())) else {
            return;
        };
        let user = self.stores.user;
        spawn_local(async move {
            user.reload(api::user::get_user(&user_id)).await;
        });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
