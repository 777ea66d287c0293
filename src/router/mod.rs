//! Routing module for the restaurant ordering application

use crate::{state::SharedState, Error};
use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Request},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

/// Default cap on request bodies, which bounds image uploads
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = if self.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            tracing::error!("Request failed: {}", self);
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Creates the application router with the default upload limit
pub fn create_app_router(state: SharedState) -> Router {
    create_app_router_with_limit(state, DEFAULT_MAX_UPLOAD_BYTES)
}

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router_with_limit(state: SharedState, max_upload_bytes: usize) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        tracing::info!("REQ: {} {}", req.method(), req.uri());
        let res = next.run(req).await;
        if !res.status().is_success() {
            tracing::warn!("RES: {} (Error)", res.status());
        }
        res
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::menu::routes())
        .merge(crate::cart::routes())
        .merge(crate::image::routes())
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
