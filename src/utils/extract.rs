use super::pipeline::{Error, Payload};
use axum::{
    async_trait,
    extract::{FromRequest, Json, Request},
};
use serde_json::{Map, Value};

/// The `data` object of a `{ "data": { ... } }` request body. A missing or
/// non-object `data` yields an empty payload so the guards report the
/// first required field as missing.
pub struct Data(pub Payload);

#[async_trait]
impl<S: Send + Sync> FromRequest<S> for Data {
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| Error::BadRequest(rejection.body_text()))?;

        let data = match body {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => data,
                _ => Map::new(),
            },
            _ => Map::new(),
        };

        Ok(Self(data))
    }
}
