//! HTTP layer: DTOs, handlers, routes and state.

pub mod dto;
pub mod extractors;
pub mod openapi;
pub mod result_handler;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
