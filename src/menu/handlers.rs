//! REST API handlers for the menu catalog

use super::{catalog, models::*};
use crate::{state::SharedState, Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

/// Creates routes for menu-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/menu", get(list_menu).post(create_menu_item))
        .route("/menu/:id", get(get_menu_item))
}

/// Endpoint: GET /menu
async fn list_menu(State(state): State<SharedState>) -> Result<Json<Vec<MenuItem>>> {
    let db = state.db.lock().await;
    Ok(Json(catalog::query_all(&db)?))
}

/// Endpoint: POST /menu
/// Creates a menu item; the id is always assigned by the store.
async fn create_menu_item(
    State(state): State<SharedState>,
    Json(payload): Json<NewMenuItem>,
) -> Result<Response> {
    let item = {
        let mut db = state.db.lock().await;
        catalog::add(&mut db, &payload)?
    };

    tracing::info!("Created menu item {} ({})", item, item.name);
    Ok((StatusCode::CREATED, Json(item)).into_response())
}

/// Endpoint: GET /menu/:id
async fn get_menu_item(State(state): State<SharedState>, Path(id): Path<i64>) -> Result<Response> {
    let db = state.db.lock().await;
    let response = match catalog::query_by_id(&db, id)? {
        Some(item) => Json(item).into_response(),
        None => Error::MenuItemNotFound(id).into_response(),
    };
    Ok(response)
}
