//! HTTP layer: DTOs, mappers, handlers, routes and state.

pub mod dto;
pub mod extractors;
pub mod mapper;
pub mod openapi;
pub mod question_handler;
pub mod quiz_handler;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
