//! Guard chain for order requests.
//!
//! Stages run in a fixed order: existence, required fields, shape,
//! identity, then the lifecycle gate. Each stage hands its result to the
//! next one, and the first failure is the response.

use super::repository::{Order, OrderFields, OrderItem, OrderStatus};
use crate::utils::{
    pipeline::{self, Error, Payload},
    store::Store,
};
use serde_json::Value;

const ENTITY: &str = "Order";
const REQUIRED_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

#[derive(Debug)]
pub struct UpdateContext {
    pub order: Order,
    pub fields: OrderFields,
    pub status: OrderStatus,
}

pub fn order_exists(store: &Store<Order>, id: &str) -> Result<Order, Error> {
    store
        .find(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Order with id {} not found", id)))
}

fn line_item(index: usize, value: &Value) -> Result<OrderItem, Error> {
    let invalid = || {
        Error::BadRequest(format!(
            "Dish at index {} must have a valid quantity as a positive integer",
            index
        ))
    };

    let mut details = value.as_object().cloned().ok_or_else(invalid)?;

    let quantity = details
        .remove("quantity")
        .as_ref()
        .and_then(pipeline::positive_integer)
        .ok_or_else(invalid)?;

    let dish_id = match details.remove("dishId") {
        Some(Value::String(id)) => Some(id),
        Some(other) => {
            details.insert(String::from("dishId"), other);
            None
        }
        None => None,
    };

    Ok(OrderItem {
        dish_id,
        quantity,
        details,
    })
}

pub fn has_valid_properties(payload: &Payload) -> Result<OrderFields, Error> {
    pipeline::has_required_fields(payload, ENTITY, &REQUIRED_FIELDS)?;

    let deliver_to = pipeline::text_field(payload, ENTITY, "deliverTo")?;
    let mobile_number = pipeline::text_field(payload, ENTITY, "mobileNumber")?;

    let dishes = payload
        .get("dishes")
        .and_then(Value::as_array)
        .filter(|dishes| !dishes.is_empty())
        .ok_or_else(|| Error::BadRequest(String::from("Order must include at least one dish")))?
        .iter()
        .enumerate()
        .map(|(index, value)| line_item(index, value))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(OrderFields {
        deliver_to,
        mobile_number,
        dishes,
    })
}

/// Only a pending order takes a new status, and any valid status is
/// accepted from there.
pub fn can_be_updated(order: &Order, payload: &Payload) -> Result<OrderStatus, Error> {
    if order.status != OrderStatus::Pending {
        return Err(Error::BadRequest(String::from(
            "An order cannot be updated unless it is pending",
        )));
    }

    let status = payload
        .get("status")
        .filter(|status| pipeline::is_truthy(status))
        .ok_or_else(|| Error::BadRequest(String::from("Order must have a status")))?;

    status
        .as_str()
        .and_then(|status| status.parse::<OrderStatus>().ok())
        .ok_or_else(|| Error::BadRequest(String::from("Order status is invalid")))
}

pub fn can_be_deleted(order: &Order) -> Result<(), Error> {
    match order.status {
        OrderStatus::Pending => Ok(()),
        _ => Err(Error::BadRequest(String::from(
            "An order cannot be deleted unless it is pending",
        ))),
    }
}

pub fn for_create(payload: &Payload) -> Result<OrderFields, Error> {
    has_valid_properties(payload)
}

pub fn for_update(
    store: &Store<Order>,
    id: &str,
    payload: &Payload,
) -> Result<UpdateContext, Error> {
    let order = order_exists(store, id)?;
    let fields = has_valid_properties(payload)?;
    pipeline::has_matching_id(payload, ENTITY, &order.id)?;
    let status = can_be_updated(&order, payload)?;

    Ok(UpdateContext {
        order,
        fields,
        status,
    })
}

pub fn for_delete(store: &Store<Order>, id: &str) -> Result<Order, Error> {
    let order = order_exists(store, id)?;
    can_be_deleted(&order)?;

    Ok(order)
}
