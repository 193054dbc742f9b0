//! # CRUD State Machine
//!
//! This module owns the canonical record list, the form draft, the edit
//! target, and the busy flag, and exposes the operations that reconcile them
//! against the remote store.
//!
//! ## Responsibilities:
//! - One store operation in flight at a time (the busy flag gates every
//!   other mutating entry point)
//! - Full reload after every successful mutation; the store is the sole
//!   source of truth and nothing is merged locally
//! - A failed load empties the list so stale rows are never shown next to
//!   the load error
//!
//! Operations mutate the state and return nothing; failures surface in the
//! snapshot (`load_error`, `action_error`) for the projection to render.

use log::{debug, info, warn};
use shared::{MenuItem, ValidationError};
use thiserror::Error;

use crate::api::{ConfirmDelete, MenuStore, StoreError};
use crate::form::MenuItemForm;

/// Failure surfaced by a submit or remove operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    /// Local validation failure; the store was never contacted.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Failure reported by the store; retrying the same operation is valid.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Snapshot of everything the UI derives its rendering from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    /// Records from the last successful load, ascending by id.
    pub items: Vec<MenuItem>,
    /// True while a store operation is in flight.
    pub loading: bool,
    /// True once the first load has completed, successfully or not.
    pub loaded: bool,
    /// Message from a failed load. The list is empty whenever this is set.
    pub load_error: Option<String>,
    /// The editable form draft.
    pub form: MenuItemForm,
    /// Id of the record being edited; `None` means submitting creates a new record.
    pub editing_id: Option<i64>,
    /// Failure from the last submit or remove, cleared on the next attempt.
    pub action_error: Option<ActionError>,
}

/// The menu manager application core: a store client plus the state machine.
pub struct MenuApp<S: MenuStore> {
    store: S,
    pub state: MenuState,
}

impl<S: MenuStore> MenuApp<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: MenuState::default(),
        }
    }

    /// Reload the record list from the store.
    ///
    /// Not issued while another operation is in flight. On failure the list
    /// is emptied and the message recorded; the busy flag always clears.
    pub async fn load(&mut self) {
        if self.state.loading {
            warn!("load requested while another operation is in flight; not issued");
            return;
        }
        self.state.loading = true;
        self.refresh().await;
        self.state.loading = false;
    }

    /// Submit the draft: update when an edit target is set, create otherwise.
    ///
    /// Validation failures abort before any store call and leave the draft
    /// as-is. A store failure also leaves the draft and edit target untouched
    /// so the user can retry. Success clears both and reloads the list.
    pub async fn submit(&mut self) {
        if self.state.loading {
            warn!("submit requested while another operation is in flight; not issued");
            return;
        }
        self.state.action_error = None;

        let fields = match self.state.form.validate() {
            Ok(fields) => fields,
            Err(err) => {
                info!("submit blocked by validation: {}", err);
                self.state.action_error = Some(err.into());
                return;
            }
        };

        self.state.loading = true;
        let result = match self.state.editing_id {
            Some(id) => {
                info!("updating menu item {}", id);
                self.store.update(id, fields).await
            }
            None => {
                info!("creating menu item {:?}", fields.name);
                self.store.create(fields).await
            }
        };

        match result {
            Ok(()) => {
                self.state.form.clear();
                self.state.editing_id = None;
                self.refresh().await;
            }
            Err(err) => {
                warn!("failed to save menu item: {}", err);
                self.state.action_error = Some(err.into());
            }
        }
        self.state.loading = false;
    }

    /// Delete the item with the given id.
    ///
    /// Consent must already have been given, through `request_remove` or an
    /// equivalent prompt. Success reloads the list; failure surfaces the
    /// store message and changes nothing else.
    pub async fn remove(&mut self, id: i64) {
        if self.state.loading {
            warn!("remove requested while another operation is in flight; not issued");
            return;
        }
        self.state.action_error = None;
        self.state.loading = true;

        info!("deleting menu item {}", id);
        match self.store.delete(id).await {
            Ok(()) => {
                // Clearing the draft keeps the edit target from pointing at
                // a record that no longer exists.
                self.state.form.clear();
                self.state.editing_id = None;
                self.refresh().await;
            }
            Err(err) => {
                warn!("failed to delete menu item {}: {}", id, err);
                self.state.action_error = Some(err.into());
            }
        }
        self.state.loading = false;
    }

    /// Ask the confirmation collaborator, then delete.
    ///
    /// A declined prompt issues no store call and changes no state.
    pub async fn request_remove(&mut self, id: i64, prompt: &dyn ConfirmDelete) {
        let name = self
            .state
            .items
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| format!("item {}", id));

        if !prompt.confirm(&name) {
            debug!("delete of menu item {} declined", id);
            return;
        }
        self.remove(id).await;
    }

    /// Start editing an existing record: copy its fields into the draft and
    /// remember its id. The record list itself is untouched.
    pub fn begin_edit(&mut self, item: &MenuItem) {
        debug!("editing menu item {}", item.id);
        self.state.form.populate_from_item(item);
        self.state.editing_id = Some(item.id);
        self.state.action_error = None;
    }

    /// Clear the draft and leave create mode. Idempotent.
    pub fn reset_form(&mut self) {
        self.state.form.clear();
        self.state.editing_id = None;
        self.state.action_error = None;
    }

    /// Fetch the list and replace the snapshot with the result.
    async fn refresh(&mut self) {
        debug!("fetching menu items");
        match self.store.list().await {
            Ok(mut items) => {
                // The store already orders by id; the stable sort holds the
                // invariant even against a misbehaving backend.
                items.sort_by_key(|item| item.id);
                info!("loaded {} menu items", items.len());
                self.state.items = items;
                self.state.load_error = None;
            }
            Err(err) => {
                warn!("failed to load menu items: {}", err);
                self.state.items.clear();
                self.state.load_error = Some(err.to_string());
            }
        }
        self.state.loaded = true;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use shared::MenuItemFields;

    use super::*;
    use crate::memory_store::MemoryStore;

    /// Wraps the in-memory store and records which operations were issued.
    struct RecordingStore {
        inner: MemoryStore,
        calls: Mutex<Vec<&'static str>>,
    }

    impl RecordingStore {
        fn new(inner: MemoryStore) -> Self {
            Self {
                inner,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl MenuStore for RecordingStore {
        async fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
            self.record("list");
            self.inner.list().await
        }

        async fn create(&self, fields: MenuItemFields) -> Result<(), StoreError> {
            self.record("create");
            self.inner.create(fields).await
        }

        async fn update(&self, id: i64, fields: MenuItemFields) -> Result<(), StoreError> {
            self.record("update");
            self.inner.update(id, fields).await
        }

        async fn delete(&self, id: i64) -> Result<(), StoreError> {
            self.record("delete");
            self.inner.delete(id).await
        }
    }

    struct Approve;
    struct Decline;

    impl ConfirmDelete for Approve {
        fn confirm(&self, _item_name: &str) -> bool {
            true
        }
    }

    impl ConfirmDelete for Decline {
        fn confirm(&self, _item_name: &str) -> bool {
            false
        }
    }

    fn item(id: i64, name: &str, price: f64) -> MenuItem {
        MenuItem {
            id,
            name: name.to_string(),
            description: None,
            price,
            image_url: None,
        }
    }

    fn app_with(items: Vec<MenuItem>) -> MenuApp<RecordingStore> {
        MenuApp::new(RecordingStore::new(MemoryStore::with_items(items)))
    }

    #[tokio::test]
    async fn test_load_populates_items_in_id_order() {
        let mut app = app_with(vec![item(2, "Iced Tea", 8000.0), item(1, "Fried Rice", 25000.0)]);
        app.load().await;

        assert!(!app.state.loading);
        assert!(app.state.loaded);
        assert_eq!(app.state.load_error, None);
        let ids: Vec<i64> = app.state.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_load_failure_clears_items_and_sets_error() {
        let mut app = app_with(vec![item(1, "Fried Rice", 25000.0)]);
        app.load().await;
        assert_eq!(app.state.items.len(), 1);

        app.store.inner.fail_with("network down");
        app.load().await;

        assert_eq!(app.state.items.len(), 0);
        assert_eq!(app.state.load_error, Some("network down".to_string()));
        assert!(app.state.loaded);
        assert!(!app.state.loading);
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_does_not_contact_store() {
        let mut app = app_with(Vec::new());
        app.state.form.price = "25000".to_string();
        app.submit().await;

        assert_eq!(
            app.state.action_error,
            Some(ActionError::Validation(ValidationError::MissingNameOrPrice))
        );
        assert!(app.store.calls().is_empty());
        assert!(!app.state.loading);
    }

    #[tokio::test]
    async fn test_submit_with_non_numeric_price_does_not_contact_store() {
        for price in ["abc", "25,000", "twelve"] {
            let mut app = app_with(Vec::new());
            app.state.form.name = "Fried Rice".to_string();
            app.state.form.price = price.to_string();
            app.submit().await;

            assert_eq!(
                app.state.action_error,
                Some(ActionError::Validation(ValidationError::PriceNotNumeric))
            );
            assert!(app.store.calls().is_empty());
        }
    }

    #[tokio::test]
    async fn test_successful_create_resets_draft_and_reloads() {
        let mut app = app_with(Vec::new());
        app.state.form.name = "Fried Rice".to_string();
        app.state.form.price = "25000".to_string();
        app.state.form.description = "House special".to_string();
        app.submit().await;

        assert!(app.state.form.is_empty());
        assert_eq!(app.state.editing_id, None);
        assert_eq!(app.state.action_error, None);
        assert!(!app.state.loading);
        assert_eq!(app.store.calls(), vec!["create", "list"]);
        assert_eq!(app.state.items.len(), 1);
        assert_eq!(app.state.items[0].name, "Fried Rice");
        assert_eq!(app.state.items[0].description, Some("House special".to_string()));
    }

    #[tokio::test]
    async fn test_edit_then_submit_without_changes_preserves_fields() {
        let original = MenuItem {
            id: 1,
            name: "Fried Rice".to_string(),
            description: Some("House special".to_string()),
            price: 25000.0,
            image_url: Some("https://example.com/fried-rice.jpg".to_string()),
        };
        let mut app = app_with(vec![original.clone()]);
        app.load().await;

        let target = app.state.items[0].clone();
        app.begin_edit(&target);
        app.submit().await;

        assert!(app.state.form.is_empty());
        assert_eq!(app.state.editing_id, None);
        assert_eq!(app.state.items, vec![original]);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_draft_for_retry() {
        let mut app = app_with(Vec::new());
        app.state.form.name = "Fried Rice".to_string();
        app.state.form.price = "25000".to_string();
        app.store.inner.fail_with("store unavailable");
        app.submit().await;

        assert_eq!(
            app.state.action_error,
            Some(ActionError::Store(StoreError::new("store unavailable")))
        );
        assert_eq!(app.state.form.name, "Fried Rice");
        assert_eq!(app.state.form.price, "25000");
        assert!(!app.state.loading);
    }

    #[tokio::test]
    async fn test_stale_edit_target_surfaces_store_error() {
        // Record 7 was deleted by another actor after editing began.
        let mut app = app_with(vec![item(1, "Iced Tea", 8000.0)]);
        app.load().await;

        let vanished = item(7, "Satay", 30000.0);
        app.begin_edit(&vanished);
        app.submit().await;

        assert_eq!(
            app.state.action_error,
            Some(ActionError::Store(StoreError::new("Menu item 7 not found")))
        );
        assert_eq!(app.state.editing_id, Some(7));
        assert_eq!(app.state.form.name, "Satay");
        assert_eq!(app.state.items, vec![item(1, "Iced Tea", 8000.0)]);
    }

    #[tokio::test]
    async fn test_confirmed_remove_deletes_and_reloads() {
        let mut app = app_with(vec![item(1, "Fried Rice", 25000.0), item(2, "Iced Tea", 8000.0)]);
        app.load().await;

        app.request_remove(1, &Approve).await;

        assert!(!app.state.loading);
        assert!(app.state.form.is_empty());
        assert_eq!(app.state.editing_id, None);
        assert!(app.state.items.iter().all(|i| i.id != 1));
        assert_eq!(app.store.calls(), vec!["list", "delete", "list"]);
    }

    #[tokio::test]
    async fn test_declined_remove_issues_no_store_call() {
        let mut app = app_with(vec![item(1, "Fried Rice", 25000.0)]);
        app.load().await;
        let before = app.state.clone();

        app.request_remove(1, &Decline).await;

        assert_eq!(app.state, before);
        assert_eq!(app.store.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_remove_failure_leaves_state_unchanged() {
        let mut app = app_with(vec![item(1, "Fried Rice", 25000.0)]);
        app.load().await;

        app.store.inner.fail_with("store unavailable");
        app.remove(1).await;

        assert_eq!(
            app.state.action_error,
            Some(ActionError::Store(StoreError::new("store unavailable")))
        );
        assert_eq!(app.state.items, vec![item(1, "Fried Rice", 25000.0)]);
        assert!(!app.state.loading);
    }

    #[tokio::test]
    async fn test_busy_flag_blocks_new_operations() {
        let mut app = app_with(vec![item(1, "Fried Rice", 25000.0)]);
        app.state.form.name = "Iced Tea".to_string();
        app.state.form.price = "8000".to_string();
        app.state.loading = true;

        app.load().await;
        app.submit().await;
        app.remove(1).await;

        assert!(app.store.calls().is_empty());
        assert_eq!(app.state.action_error, None);
        // Still busy: the guard never clears a flag it did not set.
        assert!(app.state.loading);
    }

    #[tokio::test]
    async fn test_begin_edit_copies_fields_and_sets_target() {
        let mut app = app_with(Vec::new());
        let target = MenuItem {
            id: 5,
            name: "Satay".to_string(),
            description: None,
            price: 30000.0,
            image_url: None,
        };

        app.begin_edit(&target);

        assert_eq!(app.state.editing_id, Some(5));
        assert_eq!(app.state.form.name, "Satay");
        assert_eq!(app.state.form.description, "");
        assert_eq!(app.state.form.price, "30000");
        assert!(app.state.items.is_empty());
    }

    #[tokio::test]
    async fn test_reset_form_is_idempotent() {
        let mut app = app_with(Vec::new());
        app.begin_edit(&item(5, "Satay", 30000.0));

        app.reset_form();
        assert!(app.state.form.is_empty());
        assert_eq!(app.state.editing_id, None);

        app.reset_form();
        assert!(app.state.form.is_empty());
        assert_eq!(app.state.editing_id, None);
    }
}
