use super::types::{request, response};
use crate::{modules::order::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let orders = ctx.orders.lock().await;

    validation::order_exists(&orders, &payload.id).map(response::Success::Order)
}
