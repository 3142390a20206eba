use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::{
    modules::{
        dish::{self, repository::Dish},
        order::{self, repository::Order},
    },
    utils::pipeline::{self, Payload},
};

/// Records preloaded into the stores at startup, read from a JSON file
/// shaped like `{ "dishes": [...], "orders": [...] }`.
#[derive(Deserialize, Default, Debug)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read seed data from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse seed data from {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid seed record {id} in {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        id: String,
        source: pipeline::Error,
    },
}

pub async fn load(path: &Path) -> Result<Seed, Error> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let seed = serde_json::from_str::<Seed>(&raw).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    check(path, &seed)?;

    Ok(seed)
}

fn as_payload<T: Serialize>(record: &T) -> Payload {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => Payload::new(),
    }
}

/// Seeded records skip the request pipeline, so they go through the same
/// property checks a create would run.
fn check(path: &Path, seed: &Seed) -> Result<(), Error> {
    let invalid = |id: &str, source| Error::Invalid {
        path: path.to_path_buf(),
        id: id.to_string(),
        source,
    };

    for record in &seed.dishes {
        dish::validation::has_valid_properties(&as_payload(record))
            .map_err(|source| invalid(&record.id, source))?;
    }

    for record in &seed.orders {
        order::validation::has_valid_properties(&as_payload(record))
            .map_err(|source| invalid(&record.id, source))?;
    }

    Ok(())
}
