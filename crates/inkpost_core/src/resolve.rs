//! Relationship resolver for derived associations.
//!
//! # Responsibility
//! - Compute the associations that are not stored redundantly: an account's
//!   posts/comments, a post's author/comments, a comment's author/post.
//!
//! # Invariants
//! - Forward lookups (`post_author`, `comment_author`, `comment_post`) must
//!   succeed while referential closure holds; a miss is an internal fault,
//!   not a user-facing not-found.
//!
//! Every resolution is a linear scan filtered by equality. No index is kept;
//! at this scale a scan beats maintaining dual bookkeeping on every cascade.

use crate::model::account::Account;
use crate::model::comment::Comment;
use crate::model::post::Post;
use crate::model::EntityId;
use crate::store::{EntityStore, StoreError, StoreResult};

/// All posts authored by the given account.
pub fn account_posts(store: &EntityStore, account_id: EntityId) -> Vec<&Post> {
    store
        .posts()
        .iter()
        .filter(|post| post.author == account_id)
        .collect()
}

/// All comments authored by the given account.
pub fn account_comments(store: &EntityStore, account_id: EntityId) -> Vec<&Comment> {
    store
        .comments()
        .iter()
        .filter(|comment| comment.author == account_id)
        .collect()
}

/// All comments attached to the given post.
pub fn post_comments(store: &EntityStore, post_id: EntityId) -> Vec<&Comment> {
    store
        .comments()
        .iter()
        .filter(|comment| comment.post == post_id)
        .collect()
}

/// The account that authored the given post.
pub fn post_author<'a>(store: &'a EntityStore, post: &Post) -> StoreResult<&'a Account> {
    store
        .account(post.author)
        .ok_or(StoreError::Inconsistent("post author missing from store"))
}

/// The account that authored the given comment.
pub fn comment_author<'a>(store: &'a EntityStore, comment: &Comment) -> StoreResult<&'a Account> {
    store
        .account(comment.author)
        .ok_or(StoreError::Inconsistent("comment author missing from store"))
}

/// The post the given comment is attached to.
pub fn comment_post<'a>(store: &'a EntityStore, comment: &Comment) -> StoreResult<&'a Post> {
    store
        .post(comment.post)
        .ok_or(StoreError::Inconsistent("comment post missing from store"))
}
