//! # Menu Manager - client core
//!
//! Client-side CRUD core for a single-page menu record manager. It holds the
//! state machine that reconciles the editable form draft with the remote
//! authoritative record store, the price formatter, and the pure view
//! projection. Hosts supply the store client (`api::MenuStore`) and the
//! delete-confirmation prompt, and render whatever `view::project` derives
//! from the current state snapshot.

pub mod api;
pub mod form;
pub mod format;
pub mod memory_store;
pub mod state;
pub mod view;

pub use api::{ConfirmDelete, MenuStore, StoreError};
pub use memory_store::MemoryStore;
pub use state::{ActionError, MenuApp, MenuState};
pub use view::{project, MenuView};
