//! Shopping Cart Helpers
//!
//! This module contains helper functions for resolving a caller's host and
//! formatting cart contents.

use crate::menu::models::MenuItem;
use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use uuid::Uuid;

/// Name of the cookie carrying the caller's cart host
pub const HOST_COOKIE: &str = "cart_host";

/// Returns the host stored in the `cart_host` cookie, or mints a new one.
///
/// The boolean is `true` when the host was freshly generated and still has to
/// be handed back to the client.
pub fn resolve_host(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == HOST_COOKIE && !value.is_empty())
        .map(|(_, value)| value.to_string());

    match existing {
        Some(host) => (host, false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Attaches the `Set-Cookie` header for a freshly minted host.
pub fn with_host_cookie(mut response: Response, host: &str, is_new: bool) -> Response {
    if is_new {
        let cookie = format!("{HOST_COOKIE}={host}; Path=/; HttpOnly");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
    }
    response
}

/// Produces a human-readable one-line summary for a list of cart entries,
/// grouping repeated entries of the same menu item.
///
/// Example output: `"2x Burger, 1x Fries"`.
pub fn format_item_summary(items: &[MenuItem]) -> String {
    let mut counts: Vec<(&MenuItem, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| seen.id == item.id) {
            Some((_, count)) => *count += 1,
            None => counts.push((item, 1)),
        }
    }

    counts
        .iter()
        .map(|(item, count)| format!("{}x {}", count, item.name))
        .collect::<Vec<_>>()
        .join(", ")
}
