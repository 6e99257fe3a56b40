//! HTTP API: handlers, routing and OpenAPI document.

pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

pub use routes::{create_router, BASE_PATH};
pub use state::AppState;
