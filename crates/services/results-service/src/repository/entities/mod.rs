//! SeaORM database entities.

pub mod result;
