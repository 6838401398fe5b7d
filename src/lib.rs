#![doc = include_str!("../README.md")]

pub mod connection;
pub mod errors;
pub mod loader;
pub mod structs;
pub mod utils;

/// Prelude module re-exporting commonly used items from the crate.
pub mod prelude {
    pub use crate::{
        connection::{Connection, DriverError},
        errors::Error,
        loader::{SchemaLoader, SchemaLoaderBuilder},
        structs::*,
    };
}
