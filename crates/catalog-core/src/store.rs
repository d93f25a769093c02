//! Entity Stores
//!
//! Each store holds at most one "current" value. Writes are sequenced:
//! every write and every reload request takes a number from the same
//! counter, and a reload response is applied only when its request was
//! issued after the last write. Late responses of superseded requests
//! are dropped.

use std::cell::RefCell;
use std::future::Future;

use crate::error::ApiError;

/// Handle for one in-flight reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadToken(u64);

/// What happened to a reload response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Applied,
    /// A newer write landed first
    Stale,
    /// Fetch failed, prior value kept
    Failed,
}

#[derive(Debug, Clone)]
pub struct EntityStore<T> {
    value: Option<T>,
    issued: u64,
    last_write: u64,
}

impl<T> Default for EntityStore<T> {
    fn default() -> Self {
        Self { value: None, issued: 0, last_write: 0 }
    }
}

impl<T> EntityStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    fn next_seq(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    fn write(&mut self, value: Option<T>) {
        self.last_write = self.next_seq();
        self.value = value;
    }

    /// Seed from data resolved before the page rendered
    pub fn initialize(&mut self, value: T) {
        self.write(Some(value));
    }

    /// Local replace, used right after a successful mutation
    pub fn set(&mut self, value: T) {
        self.write(Some(value));
    }

    /// Edit the held value in place. Returns false when nothing is held.
    pub fn merge(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self.value.as_mut() {
            Some(value) => {
                f(value);
                self.last_write = self.next_seq();
                true
            }
            None => false,
        }
    }

    /// Drop the value and invalidate every in-flight reload
    pub fn reset(&mut self) {
        self.write(None);
    }

    pub fn begin_reload(&mut self) -> ReloadToken {
        ReloadToken(self.next_seq())
    }

    pub fn finish_reload(&mut self, token: ReloadToken, result: Result<T, ApiError>) -> ReloadOutcome {
        match result {
            Err(e) => {
                tracing::warn!("[STORE] reload failed, keeping last value: {}", e);
                ReloadOutcome::Failed
            }
            Ok(_) if token.0 <= self.last_write => {
                tracing::debug!("[STORE] dropping stale reload #{} (last write #{})", token.0, self.last_write);
                ReloadOutcome::Stale
            }
            Ok(value) => {
                self.last_write = token.0;
                self.value = Some(value);
                ReloadOutcome::Applied
            }
        }
    }
}

/// Slug resolution state of an entity page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Pending,
    Found,
    Missing,
}

impl<T> EntityStore<T> {
    /// Apply the answer to a slug lookup. Only a resolved entity seeds the
    /// store; an unknown slug or a failed lookup leaves it empty.
    pub fn resolve(&mut self, result: Result<Option<T>, ApiError>) -> Lookup {
        match result {
            Ok(Some(entity)) => {
                self.initialize(entity);
                Lookup::Found
            }
            Ok(None) => Lookup::Missing,
            Err(e) => {
                tracing::warn!("[STORE] lookup failed: {}", e);
                Lookup::Missing
            }
        }
    }
}

/// Owner of an [`EntityStore`] that can lend it out mutably
pub trait StoreCell<T> {
    fn with_store<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> R;
}

impl<T> StoreCell<T> for RefCell<EntityStore<T>> {
    fn with_store<R>(&self, f: impl FnOnce(&mut EntityStore<T>) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Fetch and apply a fresh value. The store is not borrowed across the await.
pub async fn reload<T, C, F>(cell: &C, fetch: F) -> ReloadOutcome
where
    C: StoreCell<T>,
    F: Future<Output = Result<T, ApiError>>,
{
    let token = cell.with_store(|s| s.begin_reload());
    let result = fetch.await;
    cell.with_store(|s| s.finish_reload(token, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;

    fn module(title: &str) -> Module {
        Module { item_id: "m1".into(), title: title.into(), course_id: "c1".into() }
    }

    #[test]
    fn test_initialize_is_visible_immediately() {
        let mut store = EntityStore::new();
        let _pending = store.begin_reload();
        store.initialize(module("Intro"));
        assert_eq!(store.current(), Some(&module("Intro")));
    }

    #[test]
    fn test_failed_reload_keeps_prior_value() {
        let mut store = EntityStore::new();
        store.initialize(module("Intro"));
        let token = store.begin_reload();
        let outcome = store.finish_reload(token, Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, ReloadOutcome::Failed);
        assert_eq!(store.current(), Some(&module("Intro")));
    }

    #[test]
    fn test_reload_started_before_set_is_stale() {
        let mut store = EntityStore::new();
        store.initialize(module("Intro"));
        let early = store.begin_reload();
        store.set(module("Intro 2"));

        assert_eq!(store.finish_reload(early, Ok(module("Intro"))), ReloadOutcome::Stale);
        assert_eq!(store.current().unwrap().title, "Intro 2");
    }

    #[test]
    fn test_later_request_wins_regardless_of_arrival_order() {
        let mut store = EntityStore::new();
        let first = store.begin_reload();
        let second = store.begin_reload();

        assert_eq!(store.finish_reload(second, Ok(module("B"))), ReloadOutcome::Applied);
        assert_eq!(store.finish_reload(first, Ok(module("A"))), ReloadOutcome::Stale);
        assert_eq!(store.current().unwrap().title, "B");
    }

    #[test]
    fn test_reset_drops_value_and_pending_reloads() {
        let mut store = EntityStore::new();
        store.initialize(module("Intro"));
        let pending = store.begin_reload();
        store.reset();

        assert!(store.current().is_none());
        assert_eq!(store.finish_reload(pending, Ok(module("Late"))), ReloadOutcome::Stale);
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_merge_requires_a_value() {
        let mut store: EntityStore<Module> = EntityStore::new();
        assert!(!store.merge(|m| m.title = "x".into()));
        store.set(module("Intro"));
        assert!(store.merge(|m| m.title = "Intro 2".into()));
        assert_eq!(store.current().unwrap().title, "Intro 2");
    }

    #[test]
    fn test_unknown_slug_leaves_store_empty() {
        let mut store: EntityStore<Module> = EntityStore::new();
        store.initialize(module("Previous page"));
        store.reset();

        assert_eq!(store.resolve(Ok(None)), Lookup::Missing);
        assert!(store.current().is_none());
    }

    #[test]
    fn test_failed_lookup_is_not_found() {
        let mut store: EntityStore<Module> = EntityStore::new();
        let outcome = store.resolve(Err(ApiError::Network("offline".into())));
        assert_eq!(outcome, Lookup::Missing);
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_resolved_slug_seeds_store() {
        let mut store = EntityStore::new();
        let pending = store.begin_reload();

        assert_eq!(store.resolve(Ok(Some(module("Intro")))), Lookup::Found);
        assert_eq!(store.current(), Some(&module("Intro")));
        assert_eq!(store.finish_reload(pending, Ok(module("Old"))), ReloadOutcome::Stale);
    }

    #[tokio::test]
    async fn test_async_reload_applies_fetched_value() {
        let cell = RefCell::new(EntityStore::new());
        cell.with_store(|s| s.initialize(module("Intro")));

        let outcome = reload(&cell, async { Ok(module("From server")) }).await;

        assert_eq!(outcome, ReloadOutcome::Applied);
        assert_eq!(cell.borrow().current().unwrap().title, "From server");
    }

    #[tokio::test]
    async fn test_async_reload_failure_is_silent() {
        let cell = RefCell::new(EntityStore::new());
        cell.with_store(|s| s.initialize(module("Intro")));

        let outcome = reload(&cell, async { Err::<Module, _>(ApiError::NotFound) }).await;

        assert_eq!(outcome, ReloadOutcome::Failed);
        assert_eq!(cell.borrow().current().unwrap().title, "Intro");
    }
}
