use super::types::{request, response};
use crate::{modules::dish::validation, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let dishes = ctx.dishes.lock().await;

    validation::dish_exists(&dishes, &payload.id).map(response::Success::Dish)
}
