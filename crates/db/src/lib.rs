//! In-memory blog store and repository layer.
//!
//! The store plays the role a database pool would in a larger deployment:
//! handlers receive a cheaply-cloneable [`BlogStore`] handle and pass it to
//! zero-sized repository structs ([`repositories::PostRepo`],
//! [`repositories::CommentRepo`], [`repositories::UserRepo`]) that own the
//! query logic.

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use store::BlogStore;
