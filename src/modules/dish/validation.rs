use super::repository::{Dish, DishFields};
use crate::utils::{
    pipeline::{self, Error, Payload},
    store::Store,
};

const ENTITY: &str = "Dish";
const REQUIRED_FIELDS: [&str; 4] = ["name", "description", "price", "image_url"];

#[derive(Debug)]
pub struct UpdateContext {
    pub dish: Dish,
    pub fields: DishFields,
}

pub fn dish_exists(store: &Store<Dish>, id: &str) -> Result<Dish, Error> {
    store
        .find(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("Dish with id {} not found", id)))
}

pub fn has_valid_properties(payload: &Payload) -> Result<DishFields, Error> {
    pipeline::has_required_fields(payload, ENTITY, &REQUIRED_FIELDS)?;

    let name = pipeline::text_field(payload, ENTITY, "name")?;
    let description = pipeline::text_field(payload, ENTITY, "description")?;
    let image_url = pipeline::text_field(payload, ENTITY, "image_url")?;

    let price = payload
        .get("price")
        .and_then(pipeline::positive_integer)
        .ok_or_else(|| {
            Error::BadRequest(String::from(
                "Dish must have a price that is an integer greater than 0",
            ))
        })?;

    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}

pub fn for_create(payload: &Payload) -> Result<DishFields, Error> {
    has_valid_properties(payload)
}

pub fn for_update(
    store: &Store<Dish>,
    id: &str,
    payload: &Payload,
) -> Result<UpdateContext, Error> {
    let dish = dish_exists(store, id)?;
    let fields = has_valid_properties(payload)?;
    pipeline::has_matching_id(payload, ENTITY, &dish.id)?;

    Ok(UpdateContext { dish, fields })
}
