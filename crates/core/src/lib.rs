//! Framework-free domain types shared by the store and API layers.

pub mod error;
pub mod pagination;
pub mod types;
