//! Data access layer.

pub mod entities;
pub mod result_repository;

pub use result_repository::{ResultRepository, ResultStore};
