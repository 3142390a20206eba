use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use crate::utils::{
    id::IdGenerator,
    store::{Entity, Store},
};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        })
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// One line of an order. Whatever else the client sent alongside
/// `dishId` and `quantity` is kept in `details` and echoed back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderItem {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: i64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderItem>,
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderItem>,
}

pub fn find_many(store: &Store<Order>) -> Vec<Order> {
    store.list()
}

pub fn create(store: &mut Store<Order>, ids: &dyn IdGenerator, payload: OrderFields) -> Order {
    let order = Order {
        id: ids.next_id(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: OrderStatus::Pending,
        dishes: payload.dishes,
    };

    store.insert(order.clone());

    order
}

pub fn update_by_id(
    store: &mut Store<Order>,
    id: &str,
    payload: OrderFields,
    status: OrderStatus,
) -> Option<Order> {
    store.find_mut(id).map(|order| {
        order.deliver_to = payload.deliver_to;
        order.mobile_number = payload.mobile_number;
        order.dishes = payload.dishes;
        order.status = status;

        order.clone()
    })
}

pub fn delete_by_id(store: &mut Store<Order>, id: &str) -> Option<Order> {
    store.remove(id)
}
