use super::types::{request, response};
use crate::{
    modules::dish::{repository, validation},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = validation::for_create(&payload.body)?;

    let mut dishes = ctx.dishes.lock().await;
    let dish = repository::create(&mut dishes, ctx.ids.as_ref(), fields);

    tracing::info!("Created dish {}", dish.id);

    Ok(response::Success::DishCreated(dish))
}
