use super::types::{request, response};
use crate::{
    modules::order::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = validation::for_create(&payload.body)?;

    let mut orders = ctx.orders.lock().await;
    let order = repository::create(&mut orders, ctx.ids.as_ref(), fields);

    tracing::info!("Created order {} with {} dish(es)", order.id, order.dishes.len());

    Ok(response::Success::OrderCreated(order))
}
