//! Menu Catalog Module
//!
//! Menu items keyed by a store-generated id. Items are created and read but
//! never updated or deleted.

pub mod catalog;
pub mod handlers;
pub mod models;

pub use handlers::routes;
pub use models::{MenuItem, NewMenuItem};
