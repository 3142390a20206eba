pub mod extract;
pub mod id;
pub mod pipeline;
pub mod seed;
pub mod store;
