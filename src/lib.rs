pub mod config;
pub mod endpoint;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod validation;

pub use endpoint::{Endpoint, EndpointError};
