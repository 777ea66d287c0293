//! Menu Domain Models
//!
//! This module contains the data structures for the menu catalog.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Menu Domain Models
// =============================================================================

/// A persisted menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Free-text description shown with the item
    pub description: String,

    /// Store-generated identifier
    pub id: i64,

    /// Identifier of the item's image. Not checked against the image store.
    pub image_id: i64,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: f64,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<id {}>", self.id)
    }
}

/// Payload for creating a menu item
///
/// Carries no `id`: identifiers are always assigned by the store, and a
/// payload that tries to supply one is rejected.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewMenuItem {
    pub description: String,
    pub name: String,
    pub price: f64,
    pub image_id: i64,
}

impl NewMenuItem {
    pub fn new(
        description: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        image_id: i64,
    ) -> Self {
        Self {
            description: description.into(),
            name: name.into(),
            price,
            image_id,
        }
    }
}
