use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.orders.lock().await;

    let order = validation::for_delete(&orders, &payload.id)?;
    repository::delete_by_id(&mut orders, &order.id);

    tracing::info!("Deleted order {}", order.id);

    Ok(response::Success::OrderDeleted)
}
