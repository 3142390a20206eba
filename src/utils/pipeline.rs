//! Building blocks shared by the per-resource guard chains.
//!
//! Every guard is a plain function returning `Result<_, Error>`; the
//! services compose them with `?`, so the first failing guard decides the
//! response and nothing after it runs.

use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::{json, Map, Value};

pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message) | Self::BadRequest(message) => message,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!("Rejected request ({}): {}", self.status(), self.message());

        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Presence in the loose sense: `null`, `false`, `0` and `""` are all absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub fn has_required_fields(payload: &Payload, entity: &str, fields: &[&str]) -> Result<(), Error> {
    match fields
        .iter()
        .find(|field| !payload.get(**field).map(is_truthy).unwrap_or(false))
    {
        Some(field) => Err(Error::BadRequest(format!(
            "{} must include a {}",
            entity, field
        ))),
        None => Ok(()),
    }
}

pub fn positive_integer(value: &Value) -> Option<i64> {
    value.as_i64().filter(|n| *n > 0)
}

pub fn text_field(payload: &Payload, entity: &str, field: &str) -> Result<String, Error> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| Error::BadRequest(format!("{} {} must be a string", entity, field)))
}

/// A truthy `id` in the body must name the entity addressed by the route.
pub fn has_matching_id(payload: &Payload, entity: &str, route_id: &str) -> Result<(), Error> {
    match payload.get("id") {
        Some(id) if is_truthy(id) && id.as_str() != Some(route_id) => {
            let id = match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };

            Err(Error::BadRequest(format!(
                "{entity} id does not match route id. {entity}: {id}, Route: {route_id}"
            )))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&value), "{value} should be falsy");
        }

        for value in [json!(true), json!(-1), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&value), "{value} should be truthy");
        }
    }

    #[test]
    fn first_missing_field_is_reported() {
        let body = payload(json!({ "name": "Soup", "price": 0 }));

        let err = has_required_fields(&body, "Dish", &["name", "description", "price"]).unwrap_err();

        assert_eq!(err, Error::BadRequest("Dish must include a description".into()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn zero_price_is_reported_as_missing() {
        let body = payload(json!({ "name": "Soup", "price": 0 }));

        let err = has_required_fields(&body, "Dish", &["name", "price"]).unwrap_err();

        assert_eq!(err.message(), "Dish must include a price");
    }

    #[test]
    fn positive_integer_rejects_non_integers() {
        assert_eq!(positive_integer(&json!(1)), Some(1));
        assert_eq!(positive_integer(&json!(0)), None);
        assert_eq!(positive_integer(&json!(-3)), None);
        assert_eq!(positive_integer(&json!(2.5)), None);
        assert_eq!(positive_integer(&json!("17")), None);
    }

    #[test]
    fn matching_or_absent_id_passes() {
        assert!(has_matching_id(&payload(json!({})), "Dish", "abc").is_ok());
        assert!(has_matching_id(&payload(json!({ "id": "" })), "Dish", "abc").is_ok());
        assert!(has_matching_id(&payload(json!({ "id": null })), "Dish", "abc").is_ok());
        assert!(has_matching_id(&payload(json!({ "id": "abc" })), "Dish", "abc").is_ok());
    }

    #[test]
    fn mismatched_id_cites_both_values() {
        let err = has_matching_id(&payload(json!({ "id": "xyz" })), "Order", "abc").unwrap_err();

        assert_eq!(
            err.message(),
            "Order id does not match route id. Order: xyz, Route: abc"
        );

        let err = has_matching_id(&payload(json!({ "id": 42 })), "Dish", "abc").unwrap_err();
        assert_eq!(err.message(), "Dish id does not match route id. Dish: 42, Route: abc");
    }
}
