//! Form draft state for the create/edit form.

use shared::{none_if_empty, MenuItem, MenuItemFields, ValidationError};

/// Working copy of the form fields.
///
/// The price is kept as the raw user text and only parsed on submit. The
/// draft has no id of its own; which record it targets, if any, is tracked
/// separately by the state machine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image_url: String,
}

impl MenuItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to empty.
    pub fn clear(&mut self) {
        self.name.clear();
        self.description.clear();
        self.price.clear();
        self.image_url.clear();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.description.is_empty()
            && self.price.is_empty()
            && self.image_url.is_empty()
    }

    /// Copy a stored item's fields into the draft for editing.
    ///
    /// The numeric price becomes its string representation; absent optional
    /// columns become empty strings.
    pub fn populate_from_item(&mut self, item: &MenuItem) {
        self.name = item.name.clone();
        self.description = item.description.clone().unwrap_or_default();
        self.price = item.price.to_string();
        self.image_url = item.image_url.clone().unwrap_or_default();
    }

    /// Validate the draft into a mutation payload, without touching the store.
    ///
    /// Name and price must be non-empty and the price must parse to a finite
    /// number. Empty description and image URL normalize to absent.
    pub fn validate(&self) -> Result<MenuItemFields, ValidationError> {
        if self.name.is_empty() || self.price.is_empty() {
            return Err(ValidationError::MissingNameOrPrice);
        }

        let price: f64 = self
            .price
            .trim()
            .parse()
            .map_err(|_| ValidationError::PriceNotNumeric)?;
        if !price.is_finite() {
            return Err(ValidationError::PriceNotNumeric);
        }

        Ok(MenuItemFields {
            name: self.name.clone(),
            description: none_if_empty(&self.description),
            price,
            image_url: none_if_empty(&self.image_url),
        })
    }
}
