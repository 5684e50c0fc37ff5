//! Gateway handlers.

pub mod info_handler;
pub mod proxy;
