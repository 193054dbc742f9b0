//! # Store Client Seam
//!
//! Defines the narrow query/mutation interface the CRUD core uses to talk to
//! the remote record store, and the user-confirmation capability consulted
//! before a delete. Both are traits so the core can be exercised without a
//! real backend or a real UI.

use async_trait::async_trait;
use shared::{MenuItem, MenuItemFields};
use thiserror::Error;

/// Failure reported by the record store.
///
/// The store contract carries a human-readable message and no structured
/// error codes, so the message is the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Client interface to the remote menu store.
///
/// Implementations are external collaborators: an HTTP backend, an embedded
/// store, or a test stub. `list` returns items ordered by ascending id.
#[async_trait]
pub trait MenuStore: Send + Sync {
    /// Fetch all menu items, ordered by ascending id.
    async fn list(&self) -> Result<Vec<MenuItem>, StoreError>;

    /// Create a new item; the store assigns its id.
    async fn create(&self, fields: MenuItemFields) -> Result<(), StoreError>;

    /// Overwrite the item with the given id.
    async fn update(&self, id: i64, fields: MenuItemFields) -> Result<(), StoreError>;

    /// Delete the item with the given id.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

/// Blocking yes/no prompt consulted before a delete is issued.
pub trait ConfirmDelete {
    /// Returns true when the user approves deleting the named item.
    fn confirm(&self, item_name: &str) -> bool;
}
