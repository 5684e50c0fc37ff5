//! SeaORM database entities.

pub mod question;
pub mod quiz;
