//! REST API handlers for image operations

use super::{models::ImageRef, store};
use crate::{state::SharedState, Error, Result};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

/// Creates routes for image-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/images", post(upload_image))
        .route("/images/:id", get(download_image).delete(remove_image))
}

/// Endpoint: POST /images
/// Stores the raw request body as a new image.
async fn upload_image(State(state): State<SharedState>, body: Bytes) -> Result<Response> {
    let image = {
        let mut db = state.db.lock().await;
        store::add(&mut db, &body)?
    };

    tracing::info!("Uploaded image {}", image);
    Ok((StatusCode::CREATED, Json(ImageRef::from(&image))).into_response())
}

/// Endpoint: GET /images/:id
async fn download_image(State(state): State<SharedState>, Path(id): Path<i64>) -> Result<Response> {
    let image = {
        let db = state.db.lock().await;
        store::get_image(&db, id)?
    };

    match image {
        Some(image) => Ok((
            [(header::CONTENT_TYPE, "application/octet-stream")],
            image.data,
        )
            .into_response()),
        None => Err(Error::ImageNotFound(id)),
    }
}

/// Endpoint: DELETE /images/:id
async fn remove_image(State(state): State<SharedState>, Path(id): Path<i64>) -> Result<StatusCode> {
    let mut db = state.db.lock().await;
    store::delete_image(&mut db, id)?;
    tracing::info!("Deleted image {}", id);
    Ok(StatusCode::NO_CONTENT)
}
