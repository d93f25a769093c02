//! Mutation Workflow
//!
//! `idle -> submitting -> idle`, with at most one submission in flight
//! per form or drop target.

use std::future::Future;

use crate::error::ApiError;
use crate::models::Titled;
use crate::store::StoreCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

/// Rejects re-submission while a request is pending
#[derive(Debug, Clone, Default)]
pub struct SubmitGuard {
    next: u64,
    in_flight: Option<u64>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// `None` while another submission is pending
    pub fn begin(&mut self) -> Option<SubmitToken> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next += 1;
        self.in_flight = Some(self.next);
        Some(SubmitToken(self.next))
    }

    /// Returns false for a token that no longer owns the guard
    pub fn finish(&mut self, token: SubmitToken) -> bool {
        if self.in_flight == Some(token.0) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

/// Call the API, then merge the new title into the store.
/// On failure the store is left untouched.
pub async fn apply_title_edit<T, C, F>(cell: &C, title: &str, call: F) -> Result<(), ApiError>
where
    T: Titled,
    C: StoreCell<T>,
    F: Future<Output = Result<(), ApiError>>,
{
    call.await?;
    cell.with_store(|s| s.merge(|value| value.set_title(title)));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Module;
    use crate::store::EntityStore;
    use std::cell::{Cell, RefCell};

    fn module_cell(title: &str) -> RefCell<EntityStore<Module>> {
        let mut store = EntityStore::new();
        store.initialize(Module { item_id: "m1".into(), title: title.into(), course_id: "c1".into() });
        RefCell::new(store)
    }

    #[test]
    fn test_guard_blocks_second_submit() {
        let mut guard = SubmitGuard::new();
        let token = guard.begin().expect("first submit");
        assert!(guard.is_pending());
        assert!(guard.begin().is_none());

        assert!(guard.finish(token));
        assert!(!guard.is_pending());
        assert!(!guard.finish(token));
        assert!(guard.begin().is_some());
    }

    #[tokio::test]
    async fn test_title_edit_merges_on_success() {
        let cell = module_cell("Intro");
        apply_title_edit(&cell, "Intro 2", async { Ok(()) }).await.unwrap();
        assert_eq!(cell.borrow().current().unwrap().title, "Intro 2");
    }

    #[tokio::test]
    async fn test_failed_title_edit_leaves_store_unchanged() {
        let cell = module_cell("Intro");
        let before = cell.borrow().current().cloned();

        let result = apply_title_edit(&cell, "Broken", async {
            Err(ApiError::from_status(400, r#"{"detail":"bad title"}"#.into()))
        })
        .await;

        assert_eq!(result.unwrap_err().user_message(), "bad title");
        assert_eq!(cell.borrow().current().cloned(), before);
    }

    #[tokio::test]
    async fn test_same_title_twice_is_idempotent() {
        let cell = module_cell("Intro");
        let calls = Cell::new(0);

        for _ in 0..2 {
            apply_title_edit(&cell, "Intro 2", async {
                calls.set(calls.get() + 1);
                Ok(())
            })
            .await
            .unwrap();
        }

        assert_eq!(calls.get(), 2);
        assert_eq!(cell.borrow().current().unwrap().title, "Intro 2");
    }

    #[tokio::test]
    async fn test_store_keeps_title_when_old_refetch_lands_late() {
        let cell = module_cell("Intro");
        let early = cell.with_store(|s| s.begin_reload());

        apply_title_edit(&cell, "Intro 2", async { Ok(()) }).await.unwrap();
        cell.with_store(|s| {
            s.finish_reload(
                early,
                Ok(Module { item_id: "m1".into(), title: "Intro".into(), course_id: "c1".into() }),
            )
        });

        assert_eq!(cell.borrow().current().unwrap().title, "Intro 2");
    }
}
