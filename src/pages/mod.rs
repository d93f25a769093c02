//! Pages
//!
//! One component per route. Entity pages resolve their slug first and
//! render the not-found view when the server does not know it.

mod ask;
mod auth;
mod course;
mod home;
mod lesson;
mod module;
mod not_found;

pub use ask::AskPage;
pub use auth::AuthPage;
pub use course::CoursePage;
pub use home::HomePage;
pub use lesson::LessonPage;
pub use module::ModulePage;
pub use not_found::NotFound;

use std::future::Future;

use catalog_core::models::Titled;
use catalog_core::mutation::SubmitGuard;
use catalog_core::routes::{EntityKind, EntityRoute};
use catalog_core::store::StoreCell;
use catalog_core::tree::find_module;
use catalog_core::ApiResult;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use serde::de::DeserializeOwned;

use crate::api;
use crate::components::{Crumb, FormMessages};
use crate::context::{use_app_context, AppContext, StoreSignal};
use crate::store::{notify_failure, notify_loading, notify_success, UiStore};

pub use catalog_core::store::Lookup;

/// Resolve the `:slug` param to an entity of `kind`. On every slug change
/// the store is reset; once resolved it is seeded and then refreshed with
/// `refetch(item_id)`. Unknown slugs leave the store empty.
pub fn use_entity_lookup<T, F, Fut>(kind: EntityKind, store: StoreSignal<T>, refetch: F) -> ReadSignal<Lookup>
where
    T: DeserializeOwned + Titled + Clone + Send + Sync + 'static,
    F: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let ctx = use_app_context();
    let params = use_params_map();
    let (lookup, set_lookup) = signal(Lookup::Pending);

    Effect::new(move |_| {
        let slug = params.read().get("slug").unwrap_or_default();
        store.reset();
        set_lookup.set(Lookup::Pending);
        if !ctx.is_authenticated() {
            return;
        }

        spawn_local(async move {
            let result = api::lookup::check_type::<T>(kind, &slug).await;
            // Page left or slug changed while resolving
            if params.try_with_untracked(|p| p.get("slug")).flatten().as_deref() != Some(slug.as_str()) {
                return;
            }
            let item_id = result.as_ref().ok().and_then(Option::as_ref).map(|e| e.item_id().to_string());
            let state = store.with_store(|s| s.resolve(result));
            set_lookup.set(state);
            match item_id {
                Some(item_id) if state == Lookup::Found => {
                    store.reload(refetch(item_id)).await;
                }
                _ => tracing::info!("[PAGE] no {} for slug {}", kind.as_str(), slug),
            }
        });
    });

    lookup
}

/// Navigation target; setting it navigates once
pub fn use_redirect() -> RwSignal<Option<String>> {
    let navigate = use_navigate();
    let target = RwSignal::new(None::<String>);
    Effect::new(move |_| {
        if let Some(path) = target.get() {
            navigate(&path, Default::default());
        }
    });
    target
}

/// Course and module breadcrumbs above a lesson or question
pub fn module_crumbs(ctx: AppContext, module_id: &str) -> Vec<Crumb> {
    ctx.stores
        .catalog
        .with_value(|catalogs| {
            find_module(catalogs, module_id).map(|(course, module)| {
                vec![
                    Crumb::link(course.title.clone(), EntityRoute::Course(course.item_id.clone()).path()),
                    Crumb::link(module.title.clone(), EntityRoute::Module(module.item_id.clone()).path()),
                ]
            })
        })
        .flatten()
        .unwrap_or_else(|| vec![Crumb::link("Module", EntityRoute::Module(module_id.to_string()).path())])
}

/// Delete an entity, refresh the tree, then run `after`
pub fn run_delete<Fut>(
    ctx: AppContext,
    ui: UiStore,
    guard: RwSignal<SubmitGuard>,
    messages: FormMessages,
    call: Fut,
    after: impl FnOnce() + 'static,
) where
    Fut: Future<Output = ApiResult<()>> + 'static,
{
    let Some(token) = guard.try_update(SubmitGuard::begin).flatten() else {
        return;
    };
    let id = notify_loading(&ui, messages.loading);
    spawn_local(async move {
        match call.await {
            Ok(()) => {
                notify_success(&ui, id, messages.success);
                ctx.reload_catalog();
                after();
            }
            Err(e) => notify_failure(&ui, id, messages.failure, &e),
        }
        guard.update(|g| {
            g.finish(token);
        });
    });
}
