//! In-memory stand-in for the remote menu store.
//!
//! Used by the demo binary and by tests. It honors the store contract the
//! core depends on: ascending-id listing, store-assigned ids, and "not found"
//! failures when updating or deleting a missing id. An injected failure
//! message makes every operation fail, for exercising error paths.

use std::sync::Mutex;

use async_trait::async_trait;
use shared::{MenuItem, MenuItemFields};

use crate::api::{MenuStore, StoreError};

#[derive(Debug)]
struct Inner {
    items: Vec<MenuItem>,
    next_id: i64,
    fail_with: Option<String>,
}

/// A menu store backed by process memory.
#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store pre-populated with the given items.
    pub fn with_items(items: Vec<MenuItem>) -> Self {
        let next_id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                items,
                next_id,
                fail_with: None,
            }),
        }
    }

    /// Make every following operation fail with the given message.
    pub fn fail_with(&self, message: &str) {
        self.lock().fail_with = Some(message.to_string());
    }

    /// Clear an injected failure.
    pub fn recover(&self) {
        self.lock().fail_with = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // Recover the guard even if a previous holder panicked.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_failure(inner: &Inner) -> Result<(), StoreError> {
    match &inner.fail_with {
        Some(message) => Err(StoreError::new(message.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl MenuStore for MemoryStore {
    async fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let inner = self.lock();
        check_failure(&inner)?;
        let mut items = inner.items.clone();
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    async fn create(&self, fields: MenuItemFields) -> Result<(), StoreError> {
        let mut inner = self.lock();
        check_failure(&inner)?;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.items.push(MenuItem {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        });
        Ok(())
    }

    async fn update(&self, id: i64, fields: MenuItemFields) -> Result<(), StoreError> {
        let mut inner = self.lock();
        check_failure(&inner)?;
        let item = inner
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| StoreError::new(format!("Menu item {} not found", id)))?;
        item.name = fields.name;
        item.description = fields.description;
        item.price = fields.price;
        item.image_url = fields.image_url;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        check_failure(&inner)?;
        let position = inner
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| StoreError::new(format!("Menu item {} not found", id)))?;
        inner.items.remove(position);
        Ok(())
    }
}
