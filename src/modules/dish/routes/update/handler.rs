use super::{service::service, types::request};
use crate::{types::Context, utils::extract::Data};
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(id): Path<String>,
    Data(body): Data,
) -> impl IntoResponse {
    service(ctx, request::Payload { id, body }).await
}
