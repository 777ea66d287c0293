//! Image Store Module
//!
//! Opaque binary blobs keyed by a store-generated id.

pub mod handlers;
pub mod models;
pub mod store;

pub use handlers::routes;
pub use models::Image;
