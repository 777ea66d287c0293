//! Shopping Cart Domain Models
//!
//! This module contains all data structures related to the per-host carts.

use crate::menu::models::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Cart Domain Models
// =============================================================================

/// A host's cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Cart {
    /// Identifier of the client owning the cart
    pub host: String,

    /// Menu items in the cart, in the order they were added.
    /// The same item appears once per time it was added.
    pub items: Vec<MenuItem>,
}

impl Cart {
    /// Number of entries carrying the given menu item id
    pub fn count_of(&self, menu_item_id: i64) -> usize {
        self.items.iter().filter(|i| i.id == menu_item_id).count()
    }
}

impl fmt::Display for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<host {}>", self.host)
    }
}

/// Input for adding a menu item to the caller's cart
#[derive(Debug, Deserialize)]
pub struct AddItemInput {
    /// Id of the menu item to add
    pub id: i64,
}
