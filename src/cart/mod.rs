//! Shopping Cart Domain Module
//!
//! This module contains the per-host cart logic, including:
//! - Domain models (Cart, inputs)
//! - Registry operations (add item, delete item, query by host)
//! - Helpers (host resolution, formatting)
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod registry;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::Cart;
