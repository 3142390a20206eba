use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::{dish, order};
use crate::{types::Context, utils::pipeline::Error};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to GrubDash API" })),
    )
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(format!("Path not found: {}", uri.path()))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(not_found)
}
