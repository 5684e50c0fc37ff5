//! Common utilities shared across all quiz platform services.
//!
//! This crate provides:
//! - Unified error handling with HTTP response conversion
//! - The uniform response envelopes and their status mapping
//! - Pagination types
//! - The generic repository / service / mapper CRUD layer
//! - The generic `CrudApi` endpoint set

pub mod api;
pub mod error;
pub mod mapper;
pub mod pagination;
pub mod repository;
pub mod response;
pub mod service;

pub use api::CrudApi;
pub use error::{AppError, AppResult, OptionExt};
pub use mapper::{Mapper, Patch};
pub use pagination::{Page, PageInfo, PageRequest};
pub use repository::{PublicRepository, Repository};
pub use response::{Accepted, ApiResponse, Created, ListResponse};
pub use service::{CrudService, PublicCrudService};
