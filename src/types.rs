use crate::{
    modules::{dish::repository::Dish, order::repository::Order},
    utils::{
        id::{IdGenerator, UlidGenerator},
        seed::{self, Seed},
        store::Store,
    },
};
use async_trait::async_trait;
use std::{env, fmt, path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => f.write_str("production"),
            Self::Development => f.write_str("development"),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

/// Everything a request handler can reach. Each application instance owns
/// its own stores.
#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub dishes: Arc<Mutex<Store<Dish>>>,
    pub orders: Arc<Mutex<Store<Order>>>,
    pub ids: Arc<dyn IdGenerator>,
}

impl Context {
    pub fn new(app: AppContext, seed: Seed) -> Self {
        Self {
            app,
            dishes: Arc::new(Mutex::new(Store::new(seed.dishes))),
            orders: Arc::new(Mutex::new(Store::new(seed.orders))),
            ids: Arc::new(UlidGenerator),
        }
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
    pub url: String,
}

#[derive(Clone, Default)]
pub struct SeedConfig {
    pub path: Option<PathBuf>,
}

#[derive(Clone)]
pub struct Config {
    pub app: AppConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT number: {0}")]
    InvalidPort(String),
}

fn parse_port(raw: &str) -> Result<u32, ConfigError> {
    raw.parse::<u32>()
        .map_err(|_| ConfigError::InvalidPort(raw.to_string()))
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let port = parse_port(&env::var("PORT").unwrap_or_else(|_| "8000".to_string()))?;
        let url = env::var("URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));
        let seed_path = env::var("SEED_DATA_PATH").ok().map(PathBuf::from);

        Ok(Self {
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
                url,
            },
            seed: SeedConfig { path: seed_path },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, seed::Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, seed::Error> {
        let seed = match &self.seed.path {
            Some(path) => {
                let seed = seed::load(path).await?;
                tracing::debug!(
                    "Loaded {} dish(es) and {} order(s) from {}",
                    seed.dishes.len(),
                    seed.orders.len(),
                    path.display()
                );
                seed
            }
            None => Seed::default(),
        };

        Ok(Context::new(
            AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
                url: self.app.url,
            },
            seed,
        ))
    }
}
