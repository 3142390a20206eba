use serde::{Deserialize, Serialize};

use crate::utils::{
    id::IdGenerator,
    store::{Entity, Store},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

impl Entity for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Business fields of a dish, checked and ready to be written.
#[derive(Clone, Debug, PartialEq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
}

pub fn find_many(store: &Store<Dish>) -> Vec<Dish> {
    store.list()
}

pub fn create(store: &mut Store<Dish>, ids: &dyn IdGenerator, payload: DishFields) -> Dish {
    let dish = Dish {
        id: ids.next_id(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    store.insert(dish.clone());

    dish
}

pub fn update_by_id(store: &mut Store<Dish>, id: &str, payload: DishFields) -> Option<Dish> {
    store.find_mut(id).map(|dish| {
        dish.name = payload.name;
        dish.description = payload.description;
        dish.price = payload.price;
        dish.image_url = payload.image_url;

        dish.clone()
    })
}
