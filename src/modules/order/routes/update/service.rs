use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.orders.lock().await;

    let validated = validation::for_update(&orders, &payload.id, &payload.body)?;
    let previous_status = validated.order.status;

    let order = repository::update_by_id(
        &mut orders,
        &validated.order.id,
        validated.fields,
        validated.status,
    )
    .ok_or_else(|| response::Error::NotFound(format!("Order with id {} not found", payload.id)))?;

    tracing::info!(
        "Updated order {} ({} -> {})",
        order.id,
        previous_status,
        order.status
    );

    Ok(response::Success::OrderUpdated(order))
}
