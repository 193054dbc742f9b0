//! # View Projection
//!
//! Derives the full render model from a state snapshot. The projection is
//! pure: identical snapshots project to identical views, and every label a
//! host needs is precomputed here so rendering stays logic-free.

use shared::MenuItem;

use crate::format::format_price;
use crate::state::MenuState;

/// Placeholder text shown when a record has no description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description.";

/// Image shown when a record's image source fails to load at render time.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150?text=No+Image";

/// Message shown when a successful load returned zero records.
pub const EMPTY_STATE_MESSAGE: &str = "No menu items found. Add one to get started.";

/// Whether submitting the form creates a new record or overwrites one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Render model for a single menu row.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuRow {
    pub id: i64,
    pub name: String,
    /// Price already formatted for display, e.g. `"Rp 25.000"`.
    pub price_label: String,
    /// Description text, or the fixed placeholder when absent.
    pub description: String,
    /// Image source when the record has one; hosts fall back to
    /// `PLACEHOLDER_IMAGE_URL` if this source fails to load.
    pub image_url: Option<String>,
}

/// Render model for the create/edit form chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub mode: FormMode,
    /// All form inputs and mutating controls are disabled while this is set.
    pub inputs_disabled: bool,
    /// The cancel control only exists in edit mode.
    pub can_cancel: bool,
    /// Message from the last failed submit or remove, if any.
    pub notice: Option<String>,
}

/// Everything the host renders, derived from one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuView {
    /// Visible while an operation is in flight or before the first load.
    pub show_loading: bool,
    /// Message from a failed load; rows are empty whenever this is set.
    pub error_banner: Option<String>,
    /// Visible when a settled, successful load returned zero records.
    pub show_empty: bool,
    /// One row per record, in list order.
    pub rows: Vec<MenuRow>,
    pub form: FormView,
}

/// Project a state snapshot into its render model.
pub fn project(state: &MenuState) -> MenuView {
    let settled = state.loaded && !state.loading && state.load_error.is_none();
    MenuView {
        show_loading: state.loading || !state.loaded,
        error_banner: state.load_error.clone(),
        show_empty: settled && state.items.is_empty(),
        rows: state.items.iter().map(row_for).collect(),
        form: FormView {
            mode: if state.editing_id.is_some() {
                FormMode::Edit
            } else {
                FormMode::Create
            },
            inputs_disabled: state.loading,
            can_cancel: state.editing_id.is_some(),
            notice: state.action_error.as_ref().map(|err| err.to_string()),
        },
    }
}

fn row_for(item: &MenuItem) -> MenuRow {
    MenuRow {
        id: item.id,
        name: item.name.clone(),
        price_label: format_price(item.price),
        description: item
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string()),
        image_url: item.image_url.clone(),
    }
}
