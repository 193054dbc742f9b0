use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A menu item as stored by the remote record store.
///
/// `id` is assigned by the store and never synthesized locally; identity and
/// uniqueness are the store's responsibility. Wire field names follow the
/// store's column names, so `image_url` serializes as `imageUrl`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Validated payload for a create or update mutation.
///
/// Produced from the form draft by validation. Optional text columns are
/// normalized so the store never receives empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemFields {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
}

/// Normalize an optional text column: empty input becomes absent.
pub fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Local validation failures raised before any store call.
///
/// These are recoverable by correcting the form input; no network request is
/// issued while one of these applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name and price must not be empty")]
    MissingNameOrPrice,
    #[error("Price must be a valid number")]
    PriceNotNumeric,
}
