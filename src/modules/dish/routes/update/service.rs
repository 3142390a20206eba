use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.dishes.lock().await;

    let validated = validation::for_update(&dishes, &payload.id, &payload.body)?;

    let dish = repository::update_by_id(&mut dishes, &validated.dish.id, validated.fields)
        .ok_or_else(|| {
            response::Error::NotFound(format!("Dish with id {} not found", payload.id))
        })?;

    tracing::info!("Updated dish {}", dish.id);

    Ok(response::Success::DishUpdated(dish))
}
