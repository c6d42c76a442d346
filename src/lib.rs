// ./src/lib.rs

pub mod assets;
pub mod config;
pub mod greet;
pub mod routes;
pub mod server;
pub mod views;

// Re-export the core API so embedders and tests can just `use saluton::*`
pub use config::Config;
pub use greet::say_hello;
pub use server::{create_app, run};
pub use views::{ViewError, Views};
// Re-export Axum primitives they might need for convenience
pub use axum;
pub use axum::http::StatusCode;
pub use axum::response::Response;
