//! Demo seed data: one admin user and fifty posts.

use quill_core::error::CoreError;

use crate::models::post::CreatePost;
use crate::models::user::CreateUser;
use crate::store::BlogStore;

/// Filler paragraph repeated into each seeded post body. Long enough that
/// list views exercise the preview truncation.
const LOREM: &str = "Lorem ipsum odor amet, consectetuer adipiscing elit. \
    Condimentum quis commodo dapibus fringilla torquent. Neque class elit \
    nunc justo potenti velit dictum. Dolor justo taciti per porta integer \
    tristique placerat imperdiet. Iaculis vivamus primis taciti urna, morbi \
    laoreet sagittis. Laoreet sapien taciti montes eget vivamus aenean. \
    Accumsan et quam enim ornare; quisque placerat magnis. Sem interdum \
    erat efficitur lectus congue ornare malesuada. Condimentum proin \
    molestie nullam aptent fusce luctus dis tristique.";

/// Number of posts created by [`run`].
pub const SEED_POST_COUNT: usize = 50;

/// Username of the seeded account.
pub const SEED_USERNAME: &str = "admin";

/// Populate the store with the demo dataset: the `admin` user plus
/// [`SEED_POST_COUNT`] posts owned by it.
///
/// The caller supplies the admin password already hashed so this crate
/// stays free of crypto dependencies. Idempotent: a store that already
/// contains posts is left untouched.
pub fn run(store: &BlogStore, admin_password_hash: String) -> Result<(), CoreError> {
    if store.post_count() > 0 {
        return Ok(());
    }

    let admin = store.insert_user(CreateUser {
        username: SEED_USERNAME.to_string(),
        password_hash: admin_password_hash,
        name: "Administrator".to_string(),
    })?;

    for i in 1..=SEED_POST_COUNT {
        store.insert_post(CreatePost {
            user_id: admin.id,
            title: format!("Post {i}"),
            body: format!("This is the content of post number {i}. {LOREM}"),
        })?;
    }

    tracing::info!(posts = SEED_POST_COUNT, "Seeded demo data");
    Ok(())
}
