//! Repository for user records.

use quill_core::error::CoreError;
use quill_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::store::BlogStore;

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created record.
    pub fn create(store: &BlogStore, input: CreateUser) -> Result<User, CoreError> {
        store.insert_user(input)
    }

    /// Find a user by internal id.
    pub fn find_by_id(store: &BlogStore, id: DbId) -> Option<User> {
        store.user_by_id(id)
    }

    /// Find a user by username (case-sensitive).
    pub fn find_by_username(store: &BlogStore, username: &str) -> Option<User> {
        store.user_by_username(username)
    }
}
