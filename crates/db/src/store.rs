//! Shared in-memory store.
//!
//! A single `RwLock` over all three entity maps serializes writers, so
//! concurrent inserts cannot race on id assignment or lose updates.
//! Referential integrity (a comment's `post_id`, an entity's `user_id`)
//! is enforced here at the storage boundary, not just in the handlers, so
//! no caller can create an orphan record.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use quill_core::error::CoreError;
use quill_core::types::DbId;

use crate::models::comment::{Comment, CreateComment};
use crate::models::post::{CreatePost, Post};
use crate::models::user::{CreateUser, User};

#[derive(Debug, Default)]
struct StoreInner {
    users: BTreeMap<DbId, User>,
    posts: BTreeMap<DbId, Post>,
    comments: BTreeMap<DbId, Comment>,
    next_user_id: DbId,
    next_post_id: DbId,
    next_comment_id: DbId,
}

impl StoreInner {
    fn user_exists(&self, id: DbId) -> bool {
        self.users.contains_key(&id)
    }
}

/// Cheaply-cloneable handle to the shared in-memory store.
///
/// Handlers keep one in `AppState` and pass it to the repository layer the
/// way a database pool would be passed in a SQL-backed deployment.
#[derive(Debug, Clone, Default)]
pub struct BlogStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl BlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Users --------------------------------------------------------------

    /// Insert a new user, assigning the next id.
    ///
    /// Fails with `Validation` if the username is already taken.
    pub fn insert_user(&self, input: CreateUser) -> Result<User, CoreError> {
        let mut inner = self.write();

        if inner.users.values().any(|u| u.username == input.username) {
            return Err(CoreError::Validation(format!(
                "username '{}' is already taken",
                input.username
            )));
        }

        inner.next_user_id += 1;
        let user = User {
            id: inner.next_user_id,
            username: input.username,
            password_hash: input.password_hash,
            name: input.name,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    pub fn user_by_id(&self, id: DbId) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// Look up a user by username (case-sensitive).
    pub fn user_by_username(&self, username: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    // -- Posts --------------------------------------------------------------

    /// Insert a new post, assigning the next id.
    ///
    /// Fails with `NotFound` if the authoring user does not exist.
    pub fn insert_post(&self, input: CreatePost) -> Result<Post, CoreError> {
        let mut inner = self.write();

        if !inner.user_exists(input.user_id) {
            return Err(CoreError::NotFound {
                entity: "user",
                id: input.user_id,
            });
        }

        inner.next_post_id += 1;
        let post = Post {
            id: inner.next_post_id,
            user_id: input.user_id,
            title: input.title,
            body: input.body,
        };
        inner.posts.insert(post.id, post.clone());
        Ok(post)
    }

    pub fn post_by_id(&self, id: DbId) -> Option<Post> {
        self.read().posts.get(&id).cloned()
    }

    pub fn post_exists(&self, id: DbId) -> bool {
        self.read().posts.contains_key(&id)
    }

    /// All posts ordered by descending id (newest first).
    pub fn posts_desc(&self) -> Vec<Post> {
        self.read().posts.values().rev().cloned().collect()
    }

    pub fn post_count(&self) -> usize {
        self.read().posts.len()
    }

    // -- Comments -----------------------------------------------------------

    /// Insert a new comment under `post_id`, assigning the next id.
    ///
    /// Any `post_id` in the payload is ignored in favour of the explicit
    /// argument. Fails with `NotFound` if the post or the authoring user is
    /// missing, so orphan comments cannot be created even by callers that
    /// bypass the HTTP layer.
    pub fn insert_comment(&self, post_id: DbId, input: CreateComment) -> Result<Comment, CoreError> {
        let mut inner = self.write();

        if !inner.posts.contains_key(&post_id) {
            return Err(CoreError::NotFound {
                entity: "post",
                id: post_id,
            });
        }
        if !inner.user_exists(input.user_id) {
            return Err(CoreError::NotFound {
                entity: "user",
                id: input.user_id,
            });
        }

        inner.next_comment_id += 1;
        let comment = Comment {
            id: inner.next_comment_id,
            post_id,
            user_id: input.user_id,
            body: input.body,
        };
        inner.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    pub fn comment_by_id(&self, id: DbId) -> Option<Comment> {
        self.read().comments.get(&id).cloned()
    }

    /// Comments belonging to `post_id` in insertion order (ascending id).
    pub fn comments_for_post(&self, post_id: DbId) -> Vec<Comment> {
        self.read()
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect()
    }

    // -- Lock helpers -------------------------------------------------------

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        // A poisoned lock means a writer panicked mid-insert; the maps are
        // still structurally valid, so recover rather than cascade panics.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn user_input(username: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            name: username.to_string(),
        }
    }

    #[test]
    fn ids_are_assigned_sequentially() {
        let store = BlogStore::new();
        let alice = store.insert_user(user_input("alice")).unwrap();
        let bob = store.insert_user(user_input("bob")).unwrap();

        assert_eq!(alice.id, 1);
        assert_eq!(bob.id, 2);
    }

    #[test]
    fn duplicate_username_rejected() {
        let store = BlogStore::new();
        store.insert_user(user_input("alice")).unwrap();

        assert_matches!(
            store.insert_user(user_input("alice")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn comment_requires_existing_post() {
        let store = BlogStore::new();
        let user = store.insert_user(user_input("alice")).unwrap();

        let result = store.insert_comment(
            99,
            CreateComment {
                post_id: None,
                user_id: user.id,
                body: "orphan".to_string(),
            },
        );

        assert_matches!(result, Err(CoreError::NotFound { entity: "post", id: 99 }));
    }

    #[test]
    fn comment_post_id_forced_to_argument() {
        let store = BlogStore::new();
        let user = store.insert_user(user_input("alice")).unwrap();
        let post = store
            .insert_post(CreatePost {
                user_id: user.id,
                title: "t".to_string(),
                body: "b".to_string(),
            })
            .unwrap();

        // Payload claims a different post; the argument wins.
        let comment = store
            .insert_comment(
                post.id,
                CreateComment {
                    post_id: Some(12345),
                    user_id: user.id,
                    body: "hi".to_string(),
                },
            )
            .unwrap();

        assert_eq!(comment.post_id, post.id);
    }

    #[test]
    fn posts_desc_returns_newest_first() {
        let store = BlogStore::new();
        let user = store.insert_user(user_input("alice")).unwrap();
        for i in 1..=3 {
            store
                .insert_post(CreatePost {
                    user_id: user.id,
                    title: format!("Post {i}"),
                    body: "body".to_string(),
                })
                .unwrap();
        }

        let ids: Vec<_> = store.posts_desc().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn comments_for_post_filters_and_keeps_insertion_order() {
        let store = BlogStore::new();
        let user = store.insert_user(user_input("alice")).unwrap();
        let p1 = store
            .insert_post(CreatePost {
                user_id: user.id,
                title: "one".to_string(),
                body: "b".to_string(),
            })
            .unwrap();
        let p2 = store
            .insert_post(CreatePost {
                user_id: user.id,
                title: "two".to_string(),
                body: "b".to_string(),
            })
            .unwrap();

        for (post, body) in [(p1.id, "a"), (p2.id, "x"), (p1.id, "b")] {
            store
                .insert_comment(
                    post,
                    CreateComment {
                        post_id: None,
                        user_id: user.id,
                        body: body.to_string(),
                    },
                )
                .unwrap();
        }

        let bodies: Vec<_> = store
            .comments_for_post(p1.id)
            .into_iter()
            .map(|c| c.body)
            .collect();
        assert_eq!(bodies, vec!["a", "b"]);
    }
}
