pub mod repository;
pub mod routes;
pub mod validation;

pub use routes::get_router;
