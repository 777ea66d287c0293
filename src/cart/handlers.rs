//! REST API handlers for cart operations
//!
//! The caller's host comes from the `cart_host` cookie; a new one is issued
//! when the request carries none.

use super::{helpers::*, models::*, registry};
use crate::{state::SharedState, Error, Result};
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart).post(add_to_cart))
        .route("/cart/:item_id", delete(remove_from_cart))
}

/// Endpoint: GET /cart
/// Returns the caller's cart.
async fn get_cart(State(state): State<SharedState>, headers: HeaderMap) -> Result<Response> {
    let (host, is_new) = resolve_host(&headers);

    let cart = {
        let db = state.db.lock().await;
        registry::query_by_host(&db, &host)?
    };

    let response = match cart {
        Some(cart) => Json(cart).into_response(),
        None => Error::CartNotFound(host.clone()).into_response(),
    };
    Ok(with_host_cookie(response, &host, is_new))
}

/// Endpoint: POST /cart
/// Adds one entry of a menu item to the caller's cart.
async fn add_to_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Result<Response> {
    let (host, is_new) = resolve_host(&headers);

    let cart = {
        let mut db = state.db.lock().await;
        registry::add_item(&mut db, &host, payload.id)?;
        registry::query_by_host(&db, &host)?
    };

    let response = cart_response(&host, cart);
    Ok(with_host_cookie(response, &host, is_new))
}

/// Endpoint: DELETE /cart/:item_id
/// Removes one entry of a menu item from the caller's cart.
async fn remove_from_cart(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(item_id): Path<i64>,
) -> Result<Response> {
    let (host, is_new) = resolve_host(&headers);

    let cart = {
        let mut db = state.db.lock().await;
        registry::delete_item_by_id(&mut db, &host, item_id)?;
        registry::query_by_host(&db, &host)?
    };

    let response = cart_response(&host, cart);
    Ok(with_host_cookie(response, &host, is_new))
}

fn cart_response(host: &str, cart: Option<Cart>) -> Response {
    match cart {
        Some(cart) => {
            tracing::info!("Cart {} - {}", cart, format_item_summary(&cart.items));
            Json(cart).into_response()
        }
        None => Error::CartNotFound(host.to_string()).into_response(),
    }
}
