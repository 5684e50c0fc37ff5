//! Business services.

pub mod result_service;

pub use result_service::ResultService;
