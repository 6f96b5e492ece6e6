//! Referential integrity checks and cascade deletes.
//!
//! # Responsibility
//! - Validate foreign keys before an entity is inserted.
//! - Cascade removals transitively after an owner is deleted.
//!
//! # Invariants
//! - After any cascade, every live post's `author` and every live comment's
//!   `author`/`post` resolve to live entities.
//! - Update paths never touch foreign keys, so only creation is validated
//!   here; updates re-check field-level rules (email uniqueness) only.

use crate::model::EntityId;
use crate::store::{EntityKind, EntityStore, StoreError, StoreResult};
use std::collections::HashSet;

/// What a cascade swept away, for logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeOutcome {
    pub posts_removed: usize,
    pub comments_removed: usize,
}

/// Fails with `Conflict` when `email` already belongs to a live account
/// other than `exclude` (the update target, when re-checking on update).
pub fn check_email_unique(
    store: &EntityStore,
    email: &str,
    exclude: Option<EntityId>,
) -> StoreResult<()> {
    let taken = store
        .accounts()
        .iter()
        .any(|account| account.email == email && Some(account.id) != exclude);
    if taken {
        return Err(StoreError::Conflict {
            field: "email",
            value: email.to_string(),
        });
    }
    Ok(())
}

/// Fails with `NotFound` unless `author` resolves to a live account.
pub fn check_post_author(store: &EntityStore, author: EntityId) -> StoreResult<()> {
    if store.account(author).is_none() {
        return Err(StoreError::NotFound {
            kind: EntityKind::Account,
            id: author,
        });
    }
    Ok(())
}

/// Checks that `author` is a live account and `post` a live, published post.
///
/// Both conditions are evaluated together; the error names both references
/// without saying which one failed.
pub fn check_comment_refs(
    store: &EntityStore,
    author: EntityId,
    post: EntityId,
) -> StoreResult<()> {
    let author_live = store.account(author).is_some();
    let post_open = store.post(post).is_some_and(|post| post.published);
    if !(author_live && post_open) {
        return Err(StoreError::CommentRefNotFound { author, post });
    }
    Ok(())
}

/// Sweeps out everything owned by a just-deleted account.
///
/// Two phases: first the account's posts together with every comment on
/// those posts, then every comment the account authored on surviving posts.
/// The account record itself is removed by the caller beforehand.
pub fn cascade_account_delete(store: &mut EntityStore, account_id: EntityId) -> CascadeOutcome {
    let removed_posts = store.remove_posts_where(|post| post.author == account_id);
    let removed_post_ids: HashSet<EntityId> = removed_posts.iter().map(|post| post.id).collect();

    let orphaned = store.remove_comments_where(|comment| removed_post_ids.contains(&comment.post));
    let authored = store.remove_comments_where(|comment| comment.author == account_id);

    CascadeOutcome {
        posts_removed: removed_posts.len(),
        comments_removed: orphaned.len() + authored.len(),
    }
}

/// Removes every comment referencing a just-deleted post.
pub fn cascade_post_delete(store: &mut EntityStore, post_id: EntityId) -> usize {
    store
        .remove_comments_where(|comment| comment.post == post_id)
        .len()
}

// Comments are leaves: deleting one cascades nothing.
