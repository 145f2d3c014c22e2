//! Domain types shared by the storage and HTTP layers.

pub mod error;
pub mod pagination;
pub mod types;
