//! Repository for posts, joined with author display names.

use quill_core::error::CoreError;
use quill_core::pagination::{PageRequest, Paginated};
use quill_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostWithAuthor};
use crate::store::BlogStore;

/// Maximum number of characters of the post body included in list views.
const PREVIEW_CHARS: usize = 500;

/// Provides CRUD and pagination operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created record.
    pub fn create(store: &BlogStore, input: CreatePost) -> Result<Post, CoreError> {
        store.insert_post(input)
    }

    /// One page of posts, newest (highest id) first, each joined with its
    /// author's display name. Bodies are truncated to a preview.
    pub fn list(store: &BlogStore, page: PageRequest) -> Paginated<PostWithAuthor> {
        let all: Vec<PostWithAuthor> = store
            .posts_desc()
            .into_iter()
            .map(|post| {
                let author_name = author_name(store, post.user_id);
                PostWithAuthor {
                    id: post.id,
                    user_id: post.user_id,
                    title: post.title,
                    body: preview(&post.body),
                    author_name,
                }
            })
            .collect();

        page.paginate(all)
    }

    /// Find a post by id with its full body and author name.
    pub fn find_by_id(store: &BlogStore, id: DbId) -> Option<PostWithAuthor> {
        store.post_by_id(id).map(|post| {
            let author_name = author_name(store, post.user_id);
            PostWithAuthor {
                id: post.id,
                user_id: post.user_id,
                title: post.title,
                body: post.body,
                author_name,
            }
        })
    }
}

fn author_name(store: &BlogStore, user_id: DbId) -> String {
    store
        .user_by_id(user_id)
        .map(|u| u.name)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Truncate a body to [`PREVIEW_CHARS`] characters, appending `...` when
/// anything was cut. Operates on chars, not bytes, so multi-byte content
/// cannot split a code point.
fn preview(body: &str) -> String {
    if body.chars().count() <= PREVIEW_CHARS {
        return body.to_string();
    }
    let mut out: String = body.chars().take(PREVIEW_CHARS).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use crate::models::user::CreateUser;

    use super::*;

    fn seeded_store(post_count: usize, body: &str) -> BlogStore {
        let store = BlogStore::new();
        let user = store
            .insert_user(CreateUser {
                username: "author".to_string(),
                password_hash: "$argon2id$fake".to_string(),
                name: "The Author".to_string(),
            })
            .unwrap();
        for i in 1..=post_count {
            store
                .insert_post(CreatePost {
                    user_id: user.id,
                    title: format!("Post {i}"),
                    body: body.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn list_is_descending_and_joined_with_author() {
        let store = seeded_store(5, "short body");
        let page = PostRepo::list(&store, PageRequest::new(Some(1), Some(3)).unwrap());

        let ids: Vec<_> = page.items.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 4, 3]);
        assert_eq!(page.total_count, 5);
        assert!(page.items.iter().all(|p| p.author_name == "The Author"));
    }

    #[test]
    fn list_truncates_long_bodies() {
        let long_body = "x".repeat(800);
        let store = seeded_store(1, &long_body);

        let page = PostRepo::list(&store, PageRequest::new(None, None).unwrap());
        let body = &page.items[0].body;
        assert_eq!(body.chars().count(), PREVIEW_CHARS + 3);
        assert!(body.ends_with("..."));

        // Full body still available on direct fetch.
        let post = PostRepo::find_by_id(&store, 1).expect("post must exist");
        assert_eq!(post.body, long_body);
    }

    #[test]
    fn short_bodies_pass_through_untouched() {
        let store = seeded_store(1, "tiny");
        let page = PostRepo::list(&store, PageRequest::new(None, None).unwrap());
        assert_eq!(page.items[0].body, "tiny");
    }

    #[test]
    fn find_by_id_missing_returns_none() {
        let store = seeded_store(1, "body");
        assert!(PostRepo::find_by_id(&store, 99).is_none());
    }

    #[test]
    fn repeated_find_returns_identical_content() {
        let store = seeded_store(3, "stable body");
        let first = PostRepo::find_by_id(&store, 2).unwrap();
        let second = PostRepo::find_by_id(&store, 2).unwrap();

        assert_eq!(first.title, second.title);
        assert_eq!(first.body, second.body);
        assert_eq!(first.author_name, second.author_name);
    }
}
