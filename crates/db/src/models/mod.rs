//! Entity structs and DTOs.
//!
//! Each submodule contains:
//! - A `Clone` entity struct matching the stored record
//! - A `Deserialize` create DTO for inserts
//! - A `Serialize` response struct for external-facing output

pub mod comment;
pub mod post;
pub mod user;
