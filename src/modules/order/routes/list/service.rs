use super::types::response;
use crate::{modules::order::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let orders = ctx.orders.lock().await;

    Ok(response::Success::Orders(repository::find_many(&orders)))
}
